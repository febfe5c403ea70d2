// crates/flexkit-core/src/properties.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::FlexError;

/// Cross-axis alignment of children.
///
/// Logical names as they appear in props; `as_keyword` produces the
/// platform style keyword ("flex-start", "center", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexAlign {
    Start,
    #[default]
    Center,
    End,
    Stretch,
    Baseline,
}

impl FlexAlign {
    pub const fn as_keyword(self) -> &'static str {
        match self {
            FlexAlign::Start => "flex-start",
            FlexAlign::Center => "center",
            FlexAlign::End => "flex-end",
            FlexAlign::Stretch => "stretch",
            FlexAlign::Baseline => "baseline",
        }
    }

    /// Logical prop name ("start", "center", ...). Used for keys and parsing.
    pub const fn as_str(self) -> &'static str {
        match self {
            FlexAlign::Start => "start",
            FlexAlign::Center => "center",
            FlexAlign::End => "end",
            FlexAlign::Stretch => "stretch",
            FlexAlign::Baseline => "baseline",
        }
    }
}

impl fmt::Display for FlexAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlexAlign {
    type Err = FlexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(FlexAlign::Start),
            "center" => Ok(FlexAlign::Center),
            "end" => Ok(FlexAlign::End),
            "stretch" => Ok(FlexAlign::Stretch),
            "baseline" => Ok(FlexAlign::Baseline),
            other => Err(FlexError::UnknownAlign(other.to_string())),
        }
    }
}

/// Main-axis justification of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexJustify {
    #[default]
    Start,
    Center,
    End,
    Between,
    Around,
    Evenly,
}

impl FlexJustify {
    pub const fn as_keyword(self) -> &'static str {
        match self {
            FlexJustify::Start => "flex-start",
            FlexJustify::Center => "center",
            FlexJustify::End => "flex-end",
            FlexJustify::Between => "space-between",
            FlexJustify::Around => "space-around",
            FlexJustify::Evenly => "space-evenly",
        }
    }

    /// Logical prop name ("start", "between", ...). Used for keys and parsing.
    pub const fn as_str(self) -> &'static str {
        match self {
            FlexJustify::Start => "start",
            FlexJustify::Center => "center",
            FlexJustify::End => "end",
            FlexJustify::Between => "between",
            FlexJustify::Around => "around",
            FlexJustify::Evenly => "evenly",
        }
    }
}

impl fmt::Display for FlexJustify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlexJustify {
    type Err = FlexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(FlexJustify::Start),
            "center" => Ok(FlexJustify::Center),
            "end" => Ok(FlexJustify::End),
            "between" => Ok(FlexJustify::Between),
            "around" => Ok(FlexJustify::Around),
            "evenly" => Ok(FlexJustify::Evenly),
            other => Err(FlexError::UnknownJustify(other.to_string())),
        }
    }
}

/// Layout axis of a flex container.
///
/// `Row` and `Col` fix this to a row/column pair; only the generic `Flex`
/// component exposes all four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    /// Platform style keyword. Identical to the logical name for directions.
    pub const fn as_keyword(self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::RowReverse => "row-reverse",
            FlexDirection::Column => "column",
            FlexDirection::ColumnReverse => "column-reverse",
        }
    }

    pub const fn is_row(self) -> bool {
        matches!(self, FlexDirection::Row | FlexDirection::RowReverse)
    }

    pub const fn is_reversed(self) -> bool {
        matches!(self, FlexDirection::RowReverse | FlexDirection::ColumnReverse)
    }
}

impl fmt::Display for FlexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_keyword())
    }
}

impl FromStr for FlexDirection {
    type Err = FlexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(FlexDirection::Row),
            "row-reverse" => Ok(FlexDirection::RowReverse),
            "column" => Ok(FlexDirection::Column),
            "column-reverse" => Ok(FlexDirection::ColumnReverse),
            other => Err(FlexError::UnknownDirection(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_keywords_match_platform_names() {
        assert_eq!(FlexAlign::Start.as_keyword(), "flex-start");
        assert_eq!(FlexAlign::Center.as_keyword(), "center");
        assert_eq!(FlexAlign::End.as_keyword(), "flex-end");
        assert_eq!(FlexAlign::Stretch.as_keyword(), "stretch");
        assert_eq!(FlexAlign::Baseline.as_keyword(), "baseline");
    }

    #[test]
    fn justify_keywords_match_platform_names() {
        assert_eq!(FlexJustify::Start.as_keyword(), "flex-start");
        assert_eq!(FlexJustify::Center.as_keyword(), "center");
        assert_eq!(FlexJustify::End.as_keyword(), "flex-end");
        assert_eq!(FlexJustify::Between.as_keyword(), "space-between");
        assert_eq!(FlexJustify::Around.as_keyword(), "space-around");
        assert_eq!(FlexJustify::Evenly.as_keyword(), "space-evenly");
    }

    #[test]
    fn direction_keywords() {
        assert_eq!(FlexDirection::Row.as_keyword(), "row");
        assert_eq!(FlexDirection::RowReverse.as_keyword(), "row-reverse");
        assert_eq!(FlexDirection::Column.as_keyword(), "column");
        assert_eq!(FlexDirection::ColumnReverse.as_keyword(), "column-reverse");
    }

    #[test]
    fn defaults() {
        assert_eq!(FlexAlign::default(), FlexAlign::Center);
        assert_eq!(FlexJustify::default(), FlexJustify::Start);
        assert_eq!(FlexDirection::default(), FlexDirection::Row);
    }

    #[test]
    fn parse_round_trips_logical_names() {
        for align in [
            FlexAlign::Start,
            FlexAlign::Center,
            FlexAlign::End,
            FlexAlign::Stretch,
            FlexAlign::Baseline,
        ] {
            assert_eq!(align.as_str().parse::<FlexAlign>().unwrap(), align);
        }
        for justify in [
            FlexJustify::Start,
            FlexJustify::Center,
            FlexJustify::End,
            FlexJustify::Between,
            FlexJustify::Around,
            FlexJustify::Evenly,
        ] {
            assert_eq!(justify.as_str().parse::<FlexJustify>().unwrap(), justify);
        }
        for direction in [
            FlexDirection::Row,
            FlexDirection::RowReverse,
            FlexDirection::Column,
            FlexDirection::ColumnReverse,
        ] {
            assert_eq!(
                direction.as_keyword().parse::<FlexDirection>().unwrap(),
                direction
            );
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert!(matches!(
            "middle".parse::<FlexAlign>(),
            Err(FlexError::UnknownAlign(_))
        ));
        assert!(matches!(
            "space-between".parse::<FlexJustify>(),
            Err(FlexError::UnknownJustify(_))
        ));
        assert!(matches!(
            "diagonal".parse::<FlexDirection>(),
            Err(FlexError::UnknownDirection(_))
        ));
    }

    #[test]
    fn serde_uses_kebab_case_names() {
        assert_eq!(
            serde_json::to_string(&FlexJustify::Between).unwrap(),
            "\"between\""
        );
        assert_eq!(
            serde_json::to_string(&FlexDirection::RowReverse).unwrap(),
            "\"row-reverse\""
        );
        let align: FlexAlign = serde_json::from_str("\"baseline\"").unwrap();
        assert_eq!(align, FlexAlign::Baseline);
    }
}
