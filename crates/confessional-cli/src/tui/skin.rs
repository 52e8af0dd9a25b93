//! Look-and-feel variants of the chat window.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;

/// Which instant-messenger style the chat window imitates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Skin {
    /// Brushed-metal desktop messenger.
    #[default]
    Aqua,
    /// Classic buddy-list instant messenger.
    Aim,
}

/// Colors used by the chat window for one skin.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub title: Color,
    pub border: Color,
    pub user: Color,
    pub bot: Color,
    pub timestamp: Color,
    pub typing: Color,
    pub highlight: Color,
}

impl Skin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aqua => "aqua",
            Self::Aim => "aim",
        }
    }

    pub fn agent_name(self) -> &'static str {
        match self {
            Self::Aqua => "Dashboard Confessional Agent",
            Self::Aim => "DashboardAgent",
        }
    }

    pub fn window_title(self) -> String {
        match self {
            Self::Aqua => format!("Chat with {}", self.agent_name()),
            Self::Aim => format!("{} - Instant Message", self.agent_name()),
        }
    }

    /// Label shown for messages from the user.
    pub fn user_label(self) -> &'static str {
        match self {
            Self::Aqua => "You",
            Self::Aim => "Me",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Aqua => Palette {
                title: Color::LightBlue,
                border: Color::Gray,
                user: Color::Blue,
                bot: Color::White,
                timestamp: Color::DarkGray,
                typing: Color::Gray,
                highlight: Color::LightCyan,
            },
            Self::Aim => Palette {
                title: Color::Yellow,
                border: Color::Blue,
                user: Color::Red,
                bot: Color::Blue,
                timestamp: Color::DarkGray,
                typing: Color::Gray,
                highlight: Color::Yellow,
            },
        }
    }
}

impl fmt::Display for Skin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Skin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aqua" | "ichat" => Ok(Self::Aqua),
            "aim" => Ok(Self::Aim),
            other => Err(format!("Unknown skin '{other}'. Valid skins: aqua, aim")),
        }
    }
}
