//! `teatrack add` / `teatrack edit` arguments

use chrono::{Local, NaiveDate};
use clap::Args;

use teatrack::types::{IceLevel, RecordDraft, SugarLevel, TeaRecord};

/// Log a purchase
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Shop brand, added to the brand list if new
    #[arg(long)]
    pub brand: String,

    /// Drink name
    #[arg(long)]
    pub name: String,

    /// Price paid
    #[arg(long)]
    pub price: f64,

    /// Purchase date, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Sweetness: label (五分糖) or alias (full, 70, half, 30, none)
    #[arg(long, default_value_t = SugarLevel::default())]
    pub sugar: SugarLevel,

    /// Ice: label (少冰) or alias (regular, less, little, no-ice, hot)
    #[arg(long, default_value_t = IceLevel::default())]
    pub ice: IceLevel,

    /// Rating from 1 to 5
    #[arg(long, default_value_t = 4)]
    pub rating: u8,

    #[arg(long)]
    pub note: Option<String>,
}

impl AddArgs {
    pub fn into_draft(self) -> RecordDraft {
        RecordDraft {
            brand: self.brand,
            name: self.name,
            price: self.price,
            date: self.date.unwrap_or_else(|| Local::now().date_naive()),
            sugar: self.sugar,
            ice: self.ice,
            rating: self.rating,
            note: self.note,
        }
    }
}

/// Change fields of a logged purchase; omitted flags keep their value
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Record id or unique id prefix
    #[arg(value_name = "ID")]
    pub id: String,

    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub price: Option<f64>,

    #[arg(long)]
    pub date: Option<NaiveDate>,

    #[arg(long)]
    pub sugar: Option<SugarLevel>,

    #[arg(long)]
    pub ice: Option<IceLevel>,

    #[arg(long)]
    pub rating: Option<u8>,

    /// New note; pass "" to clear it
    #[arg(long)]
    pub note: Option<String>,
}

impl EditArgs {
    /// Draft of `current` with the given flags applied
    pub fn apply(self, current: &TeaRecord) -> RecordDraft {
        let mut draft = RecordDraft::from_record(current);
        if let Some(brand) = self.brand {
            draft.brand = brand;
        }
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(price) = self.price {
            draft.price = price;
        }
        if let Some(date) = self.date {
            draft.date = date;
        }
        if let Some(sugar) = self.sugar {
            draft.sugar = sugar;
        }
        if let Some(ice) = self.ice {
            draft.ice = ice;
        }
        if let Some(rating) = self.rating {
            draft.rating = rating;
        }
        if let Some(note) = self.note {
            draft.note = Some(note);
        }
        draft
    }
}
