/// Title category from the `CATEGORY` key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// `DG`: game on Blu-ray disc
    DiscGame,
    /// `HG`: game installed to the HDD (PSN)
    HddGame,
    /// `GD`: game data (patches, installed disc data)
    GameData,
    /// `AP`: photo application
    AppPhoto,
    /// `AM`: music application
    AppMusic,
    /// `AV`: video application
    AppVideo,
    /// `AT`: TV application
    AppTv,
    /// `1P`: PlayStation classic
    Ps1Classic,
    /// `2P`: PlayStation 2 classic
    Ps2Classic,
    /// `MN`: PSP minis
    PspMinis,
    /// `PE`: PSP remaster
    PspRemaster,
    /// `PP`: PSP game
    PspGame,
    /// `SD`: save data
    SaveData,
    /// `IP`: install package
    InstallPackage,
    /// `HM`: PlayStation Home
    Home,
    /// Any other code, kept verbatim
    Other(String),
}

impl Category {
    /// Parse a two-letter category code. Unknown codes become [`Category::Other`].
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "DG" => Self::DiscGame,
            "HG" => Self::HddGame,
            "GD" => Self::GameData,
            "AP" => Self::AppPhoto,
            "AM" => Self::AppMusic,
            "AV" => Self::AppVideo,
            "AT" => Self::AppTv,
            "1P" => Self::Ps1Classic,
            "2P" => Self::Ps2Classic,
            "MN" => Self::PspMinis,
            "PE" => Self::PspRemaster,
            "PP" => Self::PspGame,
            "SD" => Self::SaveData,
            "IP" => Self::InstallPackage,
            "HM" => Self::Home,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::DiscGame => "DG",
            Self::HddGame => "HG",
            Self::GameData => "GD",
            Self::AppPhoto => "AP",
            Self::AppMusic => "AM",
            Self::AppVideo => "AV",
            Self::AppTv => "AT",
            Self::Ps1Classic => "1P",
            Self::Ps2Classic => "2P",
            Self::PspMinis => "MN",
            Self::PspRemaster => "PE",
            Self::PspGame => "PP",
            Self::SaveData => "SD",
            Self::InstallPackage => "IP",
            Self::Home => "HM",
            Self::Other(code) => code,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::DiscGame => "Disc Game",
            Self::HddGame => "HDD Game",
            Self::GameData => "Game Data",
            Self::AppPhoto => "Photo App",
            Self::AppMusic => "Music App",
            Self::AppVideo => "Video App",
            Self::AppTv => "TV App",
            Self::Ps1Classic => "PS1 Classic",
            Self::Ps2Classic => "PS2 Classic",
            Self::PspMinis => "PSP Minis",
            Self::PspRemaster => "PSP Remaster",
            Self::PspGame => "PSP Game",
            Self::SaveData => "Save Data",
            Self::InstallPackage => "Install Package",
            Self::Home => "PlayStation Home",
            Self::Other(code) => code,
        }
    }

    /// Whether titles of this category can be booted directly.
    pub fn is_game(&self) -> bool {
        matches!(
            self,
            Self::DiscGame
                | Self::HddGame
                | Self::Ps1Classic
                | Self::Ps2Classic
                | Self::PspMinis
                | Self::PspRemaster
        )
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_round_trip() {
        for code in [
            "DG", "HG", "GD", "AP", "AM", "AV", "AT", "1P", "2P", "MN", "PE", "PP", "SD", "IP",
            "HM",
        ] {
            let category = Category::from_code(code);
            assert!(!matches!(category, Category::Other(_)), "{code} parsed as Other");
            assert_eq!(category.code(), code);
        }
    }

    #[test]
    fn disc_game_display() {
        assert_eq!(Category::from_code("DG").to_string(), "Disc Game");
        assert!(Category::DiscGame.is_game());
        assert!(!Category::GameData.is_game());
    }

    #[test]
    fn unknown_code_is_kept() {
        let category = Category::from_code("ZZ");
        assert_eq!(category, Category::Other("ZZ".to_string()));
        assert_eq!(category.code(), "ZZ");
        assert_eq!(category.display_name(), "ZZ");
    }
}
