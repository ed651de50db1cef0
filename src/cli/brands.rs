//! `teatrack brands` subcommands

use clap::Subcommand;

use teatrack::services::{brands, Journal, KeyValueStore, MoveDirection};
use teatrack::types::{BrandConfig, Result};

#[derive(Subcommand, Debug)]
pub enum BrandsCommand {
    /// Show the brand list in order
    List {
        /// Only brands shown in quick-select
        #[arg(long)]
        visible: bool,
    },

    /// Append a brand
    Add { name: String },

    /// Show or hide a brand in quick-select
    Toggle { name: String },

    /// Move a brand one place up
    Up { name: String },

    /// Move a brand one place down
    Down { name: String },

    /// Restore the default brand list
    Reset,
}

impl BrandsCommand {
    pub fn run<S: KeyValueStore>(self, journal: &mut Journal<S>) -> Result<()> {
        match self {
            BrandsCommand::List { visible: true } => {
                let shown: Vec<BrandConfig> =
                    brands::visible_brands(journal.brands()).into_iter().cloned().collect();
                print!("{}", render_brands(&shown));
                return Ok(());
            }
            BrandsCommand::List { visible: false } => {}
            BrandsCommand::Add { name } => {
                let name = journal.add_brand(&name)?;
                println!("Added brand {}", name);
            }
            BrandsCommand::Toggle { name } => {
                let visible = journal.toggle_brand(&name)?;
                println!("{} is now {}", name, if visible { "shown" } else { "hidden" });
            }
            BrandsCommand::Up { name } => journal.move_brand(&name, MoveDirection::Up)?,
            BrandsCommand::Down { name } => journal.move_brand(&name, MoveDirection::Down)?,
            BrandsCommand::Reset => journal.reset_brands(),
        }
        print!("{}", render_brands(journal.brands()));
        Ok(())
    }
}

fn render_brands(brands: &[BrandConfig]) -> String {
    brands
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let mark = if b.visible { "x" } else { " " };
            format!("{:>2}. [{}] {}\n", i + 1, mark, b.name)
        })
        .collect()
}
