use std::fmt;

/// Match mode. Determines team size and how many team slots a roster has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Solo,
    Duo,
    Squad,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Solo, Mode::Duo, Mode::Squad];

    /// Mode selected by a match number (`n % 3`).
    pub const fn from_number(n: u64) -> Self {
        Self::ALL[(n % 3) as usize]
    }

    pub const fn team_size(self) -> usize {
        match self {
            Mode::Solo => 1,
            Mode::Duo => 2,
            Mode::Squad => 4,
        }
    }

    pub const fn slot_count(self) -> usize {
        match self {
            Mode::Solo => 100,
            Mode::Duo => 50,
            Mode::Squad => 25,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Solo => "Solo",
            Mode::Duo => "Duo",
            Mode::Squad => "Squad",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MapName {
    Erangel,
    Miramar,
    Sanhok,
    Vikendi,
    Taego,
}

impl MapName {
    pub const ALL: [MapName; 5] = [
        MapName::Erangel,
        MapName::Miramar,
        MapName::Sanhok,
        MapName::Vikendi,
        MapName::Taego,
    ];

    pub const fn from_number(n: u64) -> Self {
        Self::ALL[(n % 5) as usize]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            MapName::Erangel => "Erangel",
            MapName::Miramar => "Miramar",
            MapName::Sanhok => "Sanhok",
            MapName::Vikendi => "Vikendi",
            MapName::Taego => "Taego",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Pc,
    Xbox,
    PlayStation,
    Mobile,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Pc,
        Platform::Xbox,
        Platform::PlayStation,
        Platform::Mobile,
    ];

    pub const fn from_number(n: u64) -> Self {
        Self::ALL[(n % 4) as usize]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Platform::Pc => "PC",
            Platform::Xbox => "Xbox",
            Platform::PlayStation => "PlayStation",
            Platform::Mobile => "Mobile",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    NorthAmerica,
    Europe,
    Asia,
    SouthAmerica,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::NorthAmerica,
        Region::Europe,
        Region::Asia,
        Region::SouthAmerica,
        Region::Oceania,
    ];

    pub const fn from_number(n: u64) -> Self {
        Self::ALL[(n % 5) as usize]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::SouthAmerica => "South America",
            Region::Oceania => "Oceania",
        }
    }
}

/// Lifecycle of a match. Only moves forward: Open -> Ongoing -> Completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchStatus {
    Open,
    Ongoing,
    Completed,
}

impl MatchStatus {
    pub const ALL: [MatchStatus; 3] = [
        MatchStatus::Open,
        MatchStatus::Ongoing,
        MatchStatus::Completed,
    ];

    pub const fn from_number(n: u64) -> Self {
        Self::ALL[(n % 3) as usize]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Open => "open",
            MatchStatus::Ongoing => "ongoing",
            MatchStatus::Completed => "completed",
        }
    }

    /// Label shown next to the status indicator.
    pub const fn label(self) -> &'static str {
        match self {
            MatchStatus::Open => "Recruiting",
            MatchStatus::Ongoing => "Live",
            MatchStatus::Completed => "Completed",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(Mode, MapName, Platform, Region, MatchStatus);

/// Parse the numeric part of a match identifier.
///
/// Takes the leading run of ASCII digits after optional whitespace and an
/// optional `+`. Identifiers without leading digits, including negative
/// ones, map to 0. Overlong digit runs saturate.
pub fn parse_match_number(id: &str) -> u64 {
    let trimmed = id.trim_start();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);

    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}
