//! The shared pointer tooltip

use egui::{Context, Id, RichText};

use olympia_core::SelectionState;
use olympia_data::{MedalTally, WomenShare, YearCount, YearStat};

use crate::colors;

/// One line of tooltip text
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipLine {
    /// Coloured prefix such as `Gold:`
    pub key: Option<(String, egui::Color32)>,
    pub text: String,
    pub strong: bool,
}

impl TooltipLine {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            key: None,
            text: text.into(),
            strong: false,
        }
    }

    fn keyed(key: &str, color: egui::Color32, text: impl Into<String>) -> Self {
        Self {
            key: Some((key.to_string(), color)),
            text: text.into(),
            strong: false,
        }
    }

    fn strong(text: impl Into<String>) -> Self {
        Self {
            key: None,
            text: text.into(),
            strong: true,
        }
    }

    /// The line as plain text
    pub fn to_plain(&self) -> String {
        match &self.key {
            Some((key, _)) => format!("{} {}", key, self.text),
            None => self.text.clone(),
        }
    }
}

/// Content of the tooltip shown next to the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub title: String,
    pub lines: Vec<TooltipLine>,
}

impl Tooltip {
    /// Range of the statistic in one year
    pub fn for_stat(stat: &YearStat) -> Self {
        Self {
            title: stat.year.to_string(),
            lines: vec![
                TooltipLine::plain(format!("Max: {:.1}", stat.max)),
                TooltipLine::plain(format!("Avg: {:.1}", stat.avg)),
                TooltipLine::plain(format!("Min: {:.1}", stat.min)),
            ],
        }
    }

    /// A team's medals, with its 1-based position in the table
    pub fn for_medals(tally: &MedalTally, rank: usize) -> Self {
        Self {
            title: format!("{} - #{}", tally.team, rank),
            lines: vec![
                TooltipLine::keyed("Gold:", colors::GOLD, tally.gold.to_string()),
                TooltipLine::keyed("Silver:", colors::SILVER, tally.silver.to_string()),
                TooltipLine::keyed("Bronze:", colors::BRONZE, tally.bronze.to_string()),
                TooltipLine::strong(format!("Total Medals: {}", tally.total)),
            ],
        }
    }

    /// Athlete count for the selected sport in one year
    pub fn for_sport(selection: &SelectionState, count: &YearCount) -> Self {
        Self {
            title: selection.sport_label().to_string(),
            lines: vec![
                TooltipLine::plain(format!("Year: {}", count.year)),
                TooltipLine::plain(format!("Athletes: {}", count.count)),
            ],
        }
    }

    pub fn for_women(selection: &SelectionState, share: &WomenShare) -> Self {
        Self {
            title: selection.sport_label().to_string(),
            lines: vec![
                TooltipLine::plain(format!("Year: {}", share.year)),
                TooltipLine::plain(format!("Women: {} of {}", share.women, share.total)),
                TooltipLine::plain(format!("Share: {:.1}%", share.percent())),
            ],
        }
    }

    /// Paint the tooltip at the pointer
    pub fn show(&self, ctx: &Context) {
        egui::show_tooltip_at_pointer(ctx, Id::new("olympia-tooltip"), |ui| {
            ui.label(RichText::new(&self.title).strong());
            for line in &self.lines {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;
                    if let Some((key, color)) = &line.key {
                        ui.label(RichText::new(key).color(*color));
                    }
                    let text = RichText::new(&line.text);
                    ui.label(if line.strong { text.strong() } else { text });
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(tooltip: &Tooltip) -> Vec<String> {
        tooltip.lines.iter().map(TooltipLine::to_plain).collect()
    }

    #[test]
    fn test_stat_tooltip_one_decimal() {
        let stat = YearStat {
            year: 1936,
            avg: 175.24,
            min: 150.0,
            max: 201.06,
            is_active: true,
        };
        let tooltip = Tooltip::for_stat(&stat);
        assert_eq!(tooltip.title, "1936");
        assert_eq!(plain(&tooltip), vec!["Max: 201.1", "Avg: 175.2", "Min: 150.0"]);
    }

    #[test]
    fn test_medal_tooltip() {
        let tally = MedalTally {
            team: "Finland".to_string(),
            gold: 3,
            silver: 1,
            bronze: 2,
            total: 6,
        };
        let tooltip = Tooltip::for_medals(&tally, 4);
        assert_eq!(tooltip.title, "Finland - #4");
        assert_eq!(
            plain(&tooltip),
            vec!["Gold: 3", "Silver: 1", "Bronze: 2", "Total Medals: 6"]
        );
    }

    #[test]
    fn test_sport_tooltip_labels() {
        let count = YearCount {
            year: 1900,
            count: 42,
            is_active: true,
        };
        let all = SelectionState::default();
        assert_eq!(Tooltip::for_sport(&all, &count).title, "All sports");

        let rowing = SelectionState {
            sport: "Rowing".to_string(),
            ..SelectionState::default()
        };
        let tooltip = Tooltip::for_sport(&rowing, &count);
        assert_eq!(tooltip.title, "Rowing");
        assert_eq!(plain(&tooltip), vec!["Year: 1900", "Athletes: 42"]);
    }
}
