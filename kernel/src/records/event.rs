// Event Records
//
// An event references its client by id and carries a free-text guest
// list. Neither reference is checked against the client or guest stores.

use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind, FieldError, FieldValue};

pub mod fields {
    pub const EVENT_TYPE: &str = "event_type";
    pub const THEME: &str = "theme";
    pub const DATE: &str = "date";
    pub const TIME: &str = "time";
    pub const DURATION: &str = "duration";
    pub const VENUE_ADDRESS: &str = "venue_address";
    pub const CLIENT_ID: &str = "client_id";
    pub const GUEST_LIST: &str = "guest_list";
    pub const CATERING_COMPANY: &str = "catering_company";
    pub const CLEANING_COMPANY: &str = "cleaning_company";
    pub const DECORATIONS_COMPANY: &str = "decorations_company";
    pub const ENTERTAINMENT_COMPANY: &str = "entertainment_company";
    pub const FURNITURE_SUPPLY_COMPANY: &str = "furniture_supply_company";
    pub const INVOICE: &str = "invoice";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Kind of event, e.g. wedding or conference.
    pub event_type: String,
    pub theme: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub venue_address: String,
    pub client_id: String,

    #[serde(default)]
    pub guest_list: Vec<String>,

    pub catering_company: String,
    pub cleaning_company: String,
    pub decorations_company: String,
    pub entertainment_company: String,
    pub furniture_supply_company: String,
    pub invoice: String,
}

impl Entity for Event {
    const KIND: EntityKind = EntityKind::Event;

    const MUTABLE_FIELDS: &'static [&'static str] = &[
        fields::EVENT_TYPE,
        fields::THEME,
        fields::DATE,
        fields::TIME,
        fields::DURATION,
        fields::VENUE_ADDRESS,
        fields::CLIENT_ID,
        fields::GUEST_LIST,
        fields::CATERING_COMPANY,
        fields::CLEANING_COMPANY,
        fields::DECORATIONS_COMPANY,
        fields::ENTERTAINMENT_COMPANY,
        fields::FURNITURE_SUPPLY_COMPANY,
        fields::INVOICE,
    ];

    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), FieldError> {
        if field == fields::GUEST_LIST {
            self.guest_list = value.into_list()?;
            return Ok(());
        }

        let slot = match field {
            fields::EVENT_TYPE => &mut self.event_type,
            fields::THEME => &mut self.theme,
            fields::DATE => &mut self.date,
            fields::TIME => &mut self.time,
            fields::DURATION => &mut self.duration,
            fields::VENUE_ADDRESS => &mut self.venue_address,
            fields::CLIENT_ID => &mut self.client_id,
            fields::CATERING_COMPANY => &mut self.catering_company,
            fields::CLEANING_COMPANY => &mut self.cleaning_company,
            fields::DECORATIONS_COMPANY => &mut self.decorations_company,
            fields::ENTERTAINMENT_COMPANY => &mut self.entertainment_company,
            fields::FURNITURE_SUPPLY_COMPANY => &mut self.furniture_supply_company,
            fields::INVOICE => &mut self.invoice,
            _ => return Err(FieldError::Unknown),
        };
        *slot = value.into_text()?;
        Ok(())
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Type", self.event_type.clone()),
            ("Theme", self.theme.clone()),
            ("Date", self.date.clone()),
            ("Time", self.time.clone()),
            ("Duration", self.duration.clone()),
            ("Venue Address", self.venue_address.clone()),
            ("Client ID", self.client_id.clone()),
            ("Guest List", self.guest_list.join(", ")),
            ("Catering Company", self.catering_company.clone()),
            ("Cleaning Company", self.cleaning_company.clone()),
            ("Decorations Company", self.decorations_company.clone()),
            ("Entertainment Company", self.entertainment_company.clone()),
            ("Furniture Supply Company", self.furniture_supply_company.clone()),
            ("Invoice", self.invoice.clone()),
        ]
    }
}
