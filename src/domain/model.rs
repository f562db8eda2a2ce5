use crate::utils::error::{RadarError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, validate_unique_names};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::Value;

/// Technology 的狀態標記
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Current,
    Incoming,
    Outgoing,
    /// 無法辨識的標記，保留原字串供診斷使用
    Unknown(String),
}

impl Status {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "incoming" => Status::Incoming,
            "outgoing" => Status::Outgoing,
            other => Status::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    TriangleUp,
    TriangleDown,
}

impl MarkerShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerShape::Circle => "circle",
            MarkerShape::TriangleUp => "triangle-up",
            MarkerShape::TriangleDown => "triangle-down",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct TechnologyEntry {
    pub name: String,
    pub status: Status,
}

impl TechnologyEntry {
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: Status::Current,
        }
    }

    pub fn tagged(name: impl Into<String>, tag: &str) -> Self {
        Self {
            name: name.into(),
            status: Status::parse(tag),
        }
    }
}

/// YAML 中的兩種寫法: `- Kafka` 或 `- Kafka: incoming`
impl TryFrom<Value> for TechnologyEntry {
    type Error = String;

    fn try_from(raw: Value) -> std::result::Result<Self, Self::Error> {
        match raw {
            Value::Mapping(map) => {
                if map.len() != 1 {
                    return Err(format!(
                        "a tagged technology must have exactly one key, found {}",
                        map.len()
                    ));
                }
                match map.into_iter().next() {
                    Some((name, tag)) => {
                        let name = scalar_text(&name)
                            .ok_or_else(|| "a technology name must be a scalar".to_string())?;
                        let status = match &tag {
                            Value::String(tag) => Status::parse(tag),
                            other => Status::Unknown(render_value(other)),
                        };
                        Ok(TechnologyEntry { name, status })
                    }
                    None => Err("a tagged technology must have exactly one key".to_string()),
                }
            }
            Value::Null => Err("a technology entry cannot be empty".to_string()),
            other => scalar_text(&other)
                .map(TechnologyEntry::bare)
                .ok_or_else(|| "a technology must be a name or a single-key mapping".to_string()),
        }
    }
}

/// 字串、數字、布林值轉成名稱
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        other => scalar_text(other).unwrap_or_else(|| {
            serde_yaml::to_string(other)
                .map(|text| text.trim().to_string())
                .unwrap_or_else(|_| "<unreadable>".to_string())
        }),
    }
}

/// category 名稱 -> technologies，保留宣告順序
pub type CategoryCells = IndexMap<String, Vec<TechnologyEntry>>;

/// 完整的 radar 階層，解析後不再變動
#[derive(Debug, Clone)]
pub struct Radar {
    quadrants: Vec<String>,
    categories: Vec<String>,
    technologies: IndexMap<String, CategoryCells>,
}

impl Radar {
    /// 只檢查數量與名稱本身；technologies 內的名稱解析延後到繪製階段
    pub fn new(
        quadrants: Vec<String>,
        categories: Vec<String>,
        technologies: IndexMap<String, CategoryCells>,
    ) -> Result<Self> {
        validate_positive_number("quadrants", quadrants.len(), 1)?;
        validate_positive_number("categories", categories.len(), 1)?;

        for name in quadrants.iter() {
            validate_non_empty_string("quadrants", name)?;
        }
        for name in categories.iter() {
            validate_non_empty_string("categories", name)?;
        }
        validate_unique_names("quadrants", &quadrants)?;
        validate_unique_names("categories", &categories)?;

        Ok(Self {
            quadrants,
            categories,
            technologies,
        })
    }

    pub fn quadrants(&self) -> &[String] {
        &self.quadrants
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn technologies(&self) -> &IndexMap<String, CategoryCells> {
        &self.technologies
    }

    pub fn quadrant_index(&self, name: &str) -> Result<usize> {
        self.quadrants
            .iter()
            .position(|q| q == name)
            .ok_or_else(|| RadarError::UnknownQuadrant {
                name: name.to_string(),
            })
    }

    pub fn category_index(&self, name: &str) -> Result<usize> {
        self.categories
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| RadarError::UnknownCategory {
                name: name.to_string(),
            })
    }

    pub fn technology_count(&self) -> usize {
        self.technologies
            .values()
            .flat_map(|cells| cells.values())
            .map(Vec::len)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(Status::parse("incoming"), Status::Incoming);
        assert_eq!(Status::parse("outgoing"), Status::Outgoing);
        assert_eq!(Status::parse("bogus"), Status::Unknown("bogus".to_string()));
    }

    #[test]
    fn test_entry_from_yaml() {
        let entries: Vec<TechnologyEntry> =
            serde_yaml::from_str("- Kafka\n- Terraform: incoming\n- Ant: outgoing\n").unwrap();
        assert_eq!(entries[0], TechnologyEntry::bare("Kafka"));
        assert_eq!(entries[1].status, Status::Incoming);
        assert_eq!(entries[2].name, "Ant");
        assert_eq!(entries[2].status, Status::Outgoing);
    }

    #[test]
    fn test_entry_with_two_keys_is_rejected() {
        let result: std::result::Result<Vec<TechnologyEntry>, _> =
            serde_yaml::from_str("- {Kafka: incoming, Flink: outgoing}\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_non_string_status_is_unknown() {
        let entries: Vec<TechnologyEntry> =
            serde_yaml::from_str("- Kafka: 1\n- Flink:\n- Spark: true\n").unwrap();
        assert_eq!(entries[0], TechnologyEntry {
            name: "Kafka".to_string(),
            status: Status::Unknown("1".to_string()),
        });
        assert_eq!(entries[1].name, "Flink");
        assert_eq!(entries[1].status, Status::Unknown("null".to_string()));
        assert_eq!(entries[2].status, Status::Unknown("true".to_string()));
    }

    #[test]
    fn test_numeric_bare_name() {
        let entries: Vec<TechnologyEntry> = serde_yaml::from_str("- 2048\n- 3.5: incoming\n").unwrap();
        assert_eq!(entries[0], TechnologyEntry::bare("2048"));
        assert_eq!(entries[1].name, "3.5");
        assert_eq!(entries[1].status, Status::Incoming);
    }

    #[test]
    fn test_empty_entry_is_rejected() {
        let result: std::result::Result<Vec<TechnologyEntry>, _> = serde_yaml::from_str("- ~\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_radar_requires_quadrants_and_categories() {
        let err = Radar::new(vec![], names(&["Adopt"]), IndexMap::new()).unwrap_err();
        assert!(matches!(err, RadarError::ConfigError { .. }));

        let err = Radar::new(names(&["Tools"]), vec![], IndexMap::new()).unwrap_err();
        assert!(matches!(err, RadarError::ConfigError { .. }));
    }

    #[test]
    fn test_index_lookup() {
        let radar = Radar::new(
            names(&["Languages", "Tools"]),
            names(&["Adopt", "Trial"]),
            IndexMap::new(),
        )
        .unwrap();

        assert_eq!(radar.quadrant_index("Tools").unwrap(), 1);
        assert_eq!(radar.category_index("Adopt").unwrap(), 0);
        assert!(matches!(
            radar.quadrant_index("Unknown"),
            Err(RadarError::UnknownQuadrant { name }) if name == "Unknown"
        ));
        assert!(matches!(
            radar.category_index("Hold"),
            Err(RadarError::UnknownCategory { .. })
        ));
    }
}
