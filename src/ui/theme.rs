use ratatui::style::Color;

use crate::config::PlayersConfig;
use crate::game::PlayerId;

/// How one player is drawn.
#[derive(Debug, Clone)]
pub struct PlayerStyle {
    pub name: String,
    pub color: Color,
}

/// Maps player ids to display attributes. The engine only knows opaque ids;
/// names and colors are purely a presentation concern and live here.
#[derive(Debug, Clone)]
pub struct Theme {
    seats: [(PlayerId, PlayerStyle); 2],
}

impl Theme {
    pub fn from_config(players: &PlayersConfig, one: PlayerId, two: PlayerId) -> Self {
        Theme {
            seats: [
                (
                    one,
                    PlayerStyle {
                        name: players.one.name.clone(),
                        color: parse_color(&players.one.color),
                    },
                ),
                (
                    two,
                    PlayerStyle {
                        name: players.two.name.clone(),
                        color: parse_color(&players.two.color),
                    },
                ),
            ],
        }
    }

    pub fn style(&self, id: PlayerId) -> &PlayerStyle {
        self.seats
            .iter()
            .find(|(seat, _)| *seat == id)
            .map(|(_, style)| style)
            .unwrap_or(&self.seats[0].1)
    }
}

/// Parse a config color name into a terminal color. Unknown names fall back
/// to white rather than failing the whole app.
pub fn parse_color(name: &str) -> Color {
    match name.trim().to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_colors() {
        assert_eq!(parse_color("red"), Color::Red);
        assert_eq!(parse_color("  Yellow "), Color::Yellow);
        assert_eq!(parse_color("grey"), Color::Gray);
    }

    #[test]
    fn test_parse_unknown_color_falls_back() {
        assert_eq!(parse_color("chartreuse"), Color::White);
    }

    #[test]
    fn test_theme_lookup() {
        let players = PlayersConfig::default();
        let one = PlayerId::new(0);
        let two = PlayerId::new(1);
        let theme = Theme::from_config(&players, one, two);

        assert_eq!(theme.style(one).name, "Red");
        assert_eq!(theme.style(two).color, Color::Yellow);
    }
}
