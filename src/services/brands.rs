//! Ordered brand shortcut list
//!
//! Pure functions over `Vec<BrandConfig>`. Callers persist the list.

use crate::types::{BrandConfig, Result, TeatrackError};

/// Brands offered before the user customizes the list
const DEFAULT_BRAND_NAMES: [&str; 10] = [
    "喜茶",
    "奈雪的茶",
    "茶百道",
    "古茗",
    "一点点",
    "蜜雪冰城",
    "CoCo都可",
    "霸王茶姬",
    "益禾堂",
    "书亦烧仙草",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

pub fn default_brands() -> Vec<BrandConfig> {
    DEFAULT_BRAND_NAMES
        .iter()
        .map(|name| BrandConfig::new(*name))
        .collect()
}

fn position(list: &[BrandConfig], name: &str) -> Option<usize> {
    list.iter().position(|b| b.name == name)
}

fn find_index(list: &[BrandConfig], name: &str) -> Result<usize> {
    position(list, name).ok_or_else(|| TeatrackError::NotFound(format!("brand {}", name)))
}

/// Append a new visible brand. Returns the stored (trimmed) name.
pub fn add_brand(list: &mut Vec<BrandConfig>, name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TeatrackError::Validation("brand name is empty".into()));
    }
    if position(list, name).is_some() {
        return Err(TeatrackError::DuplicateBrand(name.to_string()));
    }
    list.push(BrandConfig::new(name));
    Ok(name.to_string())
}

/// Flip visibility and return the new value
pub fn toggle_visibility(list: &mut [BrandConfig], name: &str) -> Result<bool> {
    let idx = find_index(list, name)?;
    let brand = &mut list[idx];
    brand.visible = !brand.visible;
    Ok(brand.visible)
}

/// Swap with the neighbor in `direction`. Moving past either end does nothing.
pub fn move_brand(list: &mut [BrandConfig], name: &str, direction: MoveDirection) -> Result<()> {
    let idx = find_index(list, name)?;
    match direction {
        MoveDirection::Up if idx > 0 => list.swap(idx, idx - 1),
        MoveDirection::Down if idx + 1 < list.len() => list.swap(idx, idx + 1),
        _ => {}
    }
    Ok(())
}

/// Append `name` as visible unless already present. Returns whether it was appended.
pub fn ensure_brand(list: &mut Vec<BrandConfig>, name: &str) -> bool {
    if position(list, name).is_some() {
        return false;
    }
    list.push(BrandConfig::new(name));
    true
}

pub fn visible_brands(list: &[BrandConfig]) -> Vec<&BrandConfig> {
    list.iter().filter(|b| b.visible).collect()
}
