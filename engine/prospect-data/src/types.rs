use chrono::NaiveDate;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// League tag carried by college players and college season logs
pub const NCAA_LEAGUE: &str = "NCAA";

/// Identifier shared by every record that belongs to one prospect
///
/// The dataset encodes ids either as JSON strings or JSON integers; both
/// normalise to the same textual id so lookups never depend on the encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for PlayerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PlayerIdVisitor;

        impl<'de> Visitor<'de> for PlayerIdVisitor {
            type Value = PlayerId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a player id encoded as a string or an integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<PlayerId, E> {
                Ok(PlayerId(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<PlayerId, E> {
                Ok(PlayerId(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<PlayerId, E> {
                Ok(PlayerId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<PlayerId, E> {
                Ok(PlayerId(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<PlayerId, E> {
                // 1234.0 is how some exporters write integer ids
                if v.is_finite() && v.fract() == 0.0 {
                    Ok(PlayerId(format!("{}", v as i64)))
                } else {
                    Err(E::invalid_value(de::Unexpected::Float(v), &self))
                }
            }
        }

        deserializer.deserialize_any(PlayerIdVisitor)
    }
}

/// A draft prospect's biographical record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub player_id: PlayerId,

    /// Full name (e.g., "Cooper Flagg")
    pub name: String,

    #[serde(deserialize_with = "deserialize_birth_date")]
    pub birth_date: NaiveDate,

    /// Height in inches
    pub height: u32,

    /// Weight in pounds
    pub weight: u32,

    /// College or club (e.g., "Duke", "Real Madrid"); empty when unknown
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub current_team: String,

    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub home_country: String,

    /// "NCAA" for college players, the league tag otherwise
    pub league_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl Player {
    /// Whether the prospect currently plays college basketball
    pub fn is_ncaa(&self) -> bool {
        self.league_type == NCAA_LEAGUE
    }
}

/// The five outlets whose big boards are aggregated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outlet {
    #[serde(rename = "ESPN Rank")]
    Espn,
    #[serde(rename = "Sam Vecenie Rank")]
    SamVecenie,
    #[serde(rename = "Kevin O'Connor Rank")]
    KevinOConnor,
    #[serde(rename = "Kyle Boone Rank")]
    KyleBoone,
    #[serde(rename = "Gary Parrish Rank")]
    GaryParrish,
}

impl Outlet {
    /// All outlets in board display order
    pub const ALL: [Outlet; 5] = [
        Outlet::Espn,
        Outlet::SamVecenie,
        Outlet::KevinOConnor,
        Outlet::KyleBoone,
        Outlet::GaryParrish,
    ];

    /// Column name used by the dataset
    pub fn field_name(self) -> &'static str {
        match self {
            Outlet::Espn => "ESPN Rank",
            Outlet::SamVecenie => "Sam Vecenie Rank",
            Outlet::KevinOConnor => "Kevin O'Connor Rank",
            Outlet::KyleBoone => "Kyle Boone Rank",
            Outlet::GaryParrish => "Gary Parrish Rank",
        }
    }
}

impl fmt::Display for Outlet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Big-board positions published by each outlet for one prospect
///
/// A rank is `None` when the outlet left the prospect off its board or the
/// dataset carries something other than a finite number in that column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutletRanking {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,

    #[serde(rename = "ESPN Rank", default, deserialize_with = "deserialize_lenient_number")]
    pub espn: Option<f64>,

    #[serde(rename = "Sam Vecenie Rank", default, deserialize_with = "deserialize_lenient_number")]
    pub sam_vecenie: Option<f64>,

    #[serde(
        rename = "Kevin O'Connor Rank",
        default,
        deserialize_with = "deserialize_lenient_number"
    )]
    pub kevin_oconnor: Option<f64>,

    #[serde(rename = "Kyle Boone Rank", default, deserialize_with = "deserialize_lenient_number")]
    pub kyle_boone: Option<f64>,

    #[serde(rename = "Gary Parrish Rank", default, deserialize_with = "deserialize_lenient_number")]
    pub gary_parrish: Option<f64>,
}

impl OutletRanking {
    /// Rank reported by a single outlet
    pub fn rank(&self, outlet: Outlet) -> Option<f64> {
        match outlet {
            Outlet::Espn => self.espn,
            Outlet::SamVecenie => self.sam_vecenie,
            Outlet::KevinOConnor => self.kevin_oconnor,
            Outlet::KyleBoone => self.kyle_boone,
            Outlet::GaryParrish => self.gary_parrish,
        }
    }

    /// Every outlet paired with its rank, in `Outlet::ALL` order
    pub fn ranks(&self) -> impl Iterator<Item = (Outlet, Option<f64>)> + '_ {
        Outlet::ALL.into_iter().map(move |outlet| (outlet, self.rank(outlet)))
    }
}

/// Per-game season line for one prospect in one league
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonStat {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,

    /// "NCAA" or the professional league tag
    #[serde(rename = "League")]
    pub league: String,

    #[serde(rename = "GP", default, deserialize_with = "deserialize_lenient_number")]
    pub games_played: Option<f64>,

    #[serde(rename = "GS", default, deserialize_with = "deserialize_lenient_number")]
    pub games_started: Option<f64>,

    #[serde(rename = "MP", default, deserialize_with = "deserialize_lenient_number")]
    pub minutes: Option<f64>,

    #[serde(rename = "PTS", default, deserialize_with = "deserialize_lenient_number")]
    pub points: Option<f64>,

    #[serde(rename = "AST", default, deserialize_with = "deserialize_lenient_number")]
    pub assists: Option<f64>,

    #[serde(rename = "TRB", default, deserialize_with = "deserialize_lenient_number")]
    pub rebounds: Option<f64>,

    #[serde(rename = "BLK", default, deserialize_with = "deserialize_lenient_number")]
    pub blocks: Option<f64>,

    #[serde(rename = "STL", default, deserialize_with = "deserialize_lenient_number")]
    pub steals: Option<f64>,

    #[serde(rename = "TOV", default, deserialize_with = "deserialize_lenient_number")]
    pub turnovers: Option<f64>,

    #[serde(rename = "FG%", default, deserialize_with = "deserialize_lenient_number")]
    pub field_goal_pct: Option<f64>,

    #[serde(rename = "3P%", default, deserialize_with = "deserialize_lenient_number")]
    pub three_point_pct: Option<f64>,

    #[serde(rename = "FTP", default, deserialize_with = "deserialize_lenient_number")]
    pub free_throw_pct: Option<f64>,
}

/// A scout's written evaluation of a prospect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutingReport {
    pub player_id: PlayerId,
    pub scout: String,
    pub report: String,
}

/// The four reference collections as shipped in the dataset file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftDataset {
    #[serde(default)]
    pub bio: Vec<Player>,

    #[serde(default)]
    pub scout_rankings: Vec<OutletRanking>,

    #[serde(default)]
    pub season_logs: Vec<SeasonStat>,

    #[serde(default)]
    pub scouting_reports: Vec<ScoutingReport>,
}

/// Parse a dataset birth date, ignoring any time-of-day suffix
pub fn parse_birth_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    let trimmed = raw.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
}

/// Finite JSON numbers only; null, strings and anything else count as absent
pub fn numeric_value(value: &serde_json::Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite())
}

fn deserialize_birth_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_birth_date(&raw).map_err(|e| de::Error::custom(format!("invalid birth date '{raw}': {e}")))
}

fn deserialize_lenient_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(numeric_value))
}

fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_accepts_strings_and_integers() {
        let from_int: PlayerId = serde_json::from_str("1001").unwrap();
        let from_str: PlayerId = serde_json::from_str("\"1001\"").unwrap();
        let from_float: PlayerId = serde_json::from_str("1001.0").unwrap();

        assert_eq!(from_int, from_str);
        assert_eq!(from_float, from_str);
        assert_eq!(from_int.as_str(), "1001");

        assert!(serde_json::from_str::<PlayerId>("10.5").is_err());
    }

    #[test]
    fn test_birth_date_ignores_time_component() {
        let expected = NaiveDate::from_ymd_opt(2005, 3, 15).unwrap();
        assert_eq!(parse_birth_date("2005-03-15").unwrap(), expected);
        assert_eq!(parse_birth_date("2005-03-15 00:00:00").unwrap(), expected);
        assert_eq!(parse_birth_date("2005-03-15T00:00:00Z").unwrap(), expected);
        assert!(parse_birth_date("March 15, 2005").is_err());
    }

    #[test]
    fn test_player_deserialization() {
        let json = r#"{
            "playerId": 1001,
            "name": "Cooper Flagg",
            "birthDate": "2006-12-21",
            "height": 81,
            "weight": 205,
            "currentTeam": "Duke",
            "homeCountry": "USA",
            "leagueType": "NCAA",
            "highSchool": "Montverde Academy"
        }"#;

        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.player_id.as_str(), "1001");
        assert_eq!(player.height, 81);
        assert!(player.photo_url.is_none());
        assert!(player.is_ncaa());
    }

    #[test]
    fn test_outlet_ranks_are_lenient() {
        let json = r#"{
            "playerId": "1007",
            "ESPN Rank": 14,
            "Sam Vecenie Rank": null,
            "Kevin O'Connor Rank": "NR",
            "Kyle Boone Rank": 12.5
        }"#;

        let ranking: OutletRanking = serde_json::from_str(json).unwrap();
        assert_eq!(ranking.rank(Outlet::Espn), Some(14.0));
        assert_eq!(ranking.rank(Outlet::SamVecenie), None);
        assert_eq!(ranking.rank(Outlet::KevinOConnor), None);
        assert_eq!(ranking.rank(Outlet::KyleBoone), Some(12.5));
        assert_eq!(ranking.rank(Outlet::GaryParrish), None);
    }

    #[test]
    fn test_ranks_follow_outlet_order() {
        let ranking = OutletRanking {
            player_id: "1".into(),
            espn: Some(1.0),
            gary_parrish: Some(5.0),
            ..Default::default()
        };

        let outlets: Vec<Outlet> = ranking.ranks().map(|(outlet, _)| outlet).collect();
        assert_eq!(outlets, Outlet::ALL.to_vec());
        assert_eq!(ranking.ranks().filter(|(_, rank)| rank.is_some()).count(), 2);
    }

    #[test]
    fn test_season_stat_column_names() {
        let json = r#"{
            "playerId": 1001,
            "League": "NCAA",
            "GP": 37, "GS": 37, "MP": 30.7, "PTS": 19.2, "AST": 4.2, "TRB": 7.5,
            "BLK": 1.4, "STL": 1.4, "TOV": 2.1, "FG%": 48.1, "3P%": 38.5, "FTP": null
        }"#;

        let stat: SeasonStat = serde_json::from_str(json).unwrap();
        assert_eq!(stat.league, NCAA_LEAGUE);
        assert_eq!(stat.games_played, Some(37.0));
        assert_eq!(stat.three_point_pct, Some(38.5));
        assert_eq!(stat.free_throw_pct, None);
    }
}
