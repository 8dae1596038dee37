//! Text layout of a single search result.

use shared::domain::ProfileRecord;

use crate::ui::theme;

pub const NO_NAME_PLACEHOLDER: &str = "No name provided";
pub const NO_HEADLINE_PLACEHOLDER: &str = "No headline available";

pub fn results_header(count: usize) -> String {
    format!("Results ({count})")
}

/// What one result card displays, derived from a [`ProfileRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub name: String,
    pub headline: String,
    pub details: Vec<(String, String)>,
}

impl ProfileCard {
    pub fn from_record(record: &ProfileRecord) -> Self {
        let first = or_placeholder(record.first_name.as_deref(), NO_NAME_PLACEHOLDER);
        let last = or_placeholder(record.last_name.as_deref(), NO_NAME_PLACEHOLDER);
        Self {
            name: format!("{first} {last}"),
            headline: or_placeholder(record.headline.as_deref(), NO_HEADLINE_PLACEHOLDER)
                .to_string(),
            details: record
                .extra
                .iter()
                .map(|(key, value)| (key.clone(), value.to_string()))
                .collect(),
        }
    }

    pub fn detail_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.details
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        egui::Frame::NONE
            .fill(theme::card_fill(ui.visuals()))
            .stroke(egui::Stroke::new(
                1.0,
                ui.visuals().widgets.noninteractive.bg_stroke.color,
            ))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(&self.name).strong().size(16.0));
                ui.label(egui::RichText::new(&self.headline).small().weak());
                if !self.details.is_empty() {
                    ui.add_space(4.0);
                    for line in self.detail_lines() {
                        ui.label(egui::RichText::new(line).small().weak());
                    }
                }
            });
    }
}

fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_record_renders_name_headline_and_extra_fields() {
        let record = ProfileRecord::new()
            .with_first_name("Ada")
            .with_last_name("Lovelace")
            .with_headline("Engineer")
            .with_field("City", "London");

        let card = ProfileCard::from_record(&record);

        assert_eq!(card.name, "Ada Lovelace");
        assert_eq!(card.headline, "Engineer");
        assert_eq!(card.detail_lines().collect::<Vec<_>>(), ["City: London"]);
    }

    #[test]
    fn missing_names_fall_back_per_slot() {
        let card = ProfileCard::from_record(&ProfileRecord::new().with_headline("X"));
        assert_eq!(card.name, "No name provided No name provided");
        assert_eq!(card.headline, "X");
        assert!(card.details.is_empty());

        let card = ProfileCard::from_record(&ProfileRecord::new().with_first_name("A").with_last_name("B"));
        assert_eq!(card.name, "A B");
        assert_eq!(card.headline, NO_HEADLINE_PLACEHOLDER);
    }

    #[test]
    fn empty_strings_use_placeholders() {
        let record = ProfileRecord::new()
            .with_first_name("")
            .with_last_name("Hopper")
            .with_headline("");
        let card = ProfileCard::from_record(&record);
        assert_eq!(card.name, "No name provided Hopper");
        assert_eq!(card.headline, NO_HEADLINE_PLACEHOLDER);
    }

    #[test]
    fn falsy_named_fields_use_placeholders() {
        let record: ProfileRecord =
            serde_json::from_str(r#"{"FirstName":false,"LastName":0}"#).expect("record");
        let card = ProfileCard::from_record(&record);
        assert_eq!(card.name, "No name provided No name provided");
        assert_eq!(card.headline, NO_HEADLINE_PLACEHOLDER);
    }

    #[test]
    fn detail_lines_follow_backend_key_order() {
        let record: ProfileRecord = serde_json::from_str(
            r#"{"Skills":"Rust","FirstName":"Grace","Verified":true,"Connections":500,"Location":null}"#,
        )
        .expect("record");

        let card = ProfileCard::from_record(&record);
        assert_eq!(
            card.detail_lines().collect::<Vec<_>>(),
            [
                "Skills: Rust",
                "Verified: true",
                "Connections: 500",
                "Location: null"
            ]
        );
    }

    #[test]
    fn header_shows_count() {
        assert_eq!(results_header(1), "Results (1)");
        assert_eq!(results_header(12), "Results (12)");
    }
}
