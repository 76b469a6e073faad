use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Fiscal years tracked by the dashboard, oldest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiscalYear {
    #[serde(rename = "22")]
    Y2022,
    #[serde(rename = "23")]
    Y2023,
    #[serde(rename = "24")]
    Y2024,
}

impl FiscalYear {
    pub const ALL: [FiscalYear; 3] = [FiscalYear::Y2022, FiscalYear::Y2023, FiscalYear::Y2024];
    /// Most recent year with figures
    pub const LATEST: FiscalYear = FiscalYear::Y2024;
    /// Year compared against `LATEST` for trends and YoY change
    pub const PRIOR: FiscalYear = FiscalYear::Y2023;

    /// Position of the year inside per-year arrays
    pub fn index(self) -> usize {
        match self {
            FiscalYear::Y2022 => 0,
            FiscalYear::Y2023 => 1,
            FiscalYear::Y2024 => 2,
        }
    }

    /// Two-digit code used in field names and select values ("24")
    pub fn code(self) -> &'static str {
        match self {
            FiscalYear::Y2022 => "22",
            FiscalYear::Y2023 => "23",
            FiscalYear::Y2024 => "24",
        }
    }

    /// Chart axis label ("2024년")
    pub fn label(self) -> &'static str {
        match self {
            FiscalYear::Y2022 => "2022년",
            FiscalYear::Y2023 => "2023년",
            FiscalYear::Y2024 => "2024년",
        }
    }
}

impl FromStr for FiscalYear {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "22" | "2022" => Ok(FiscalYear::Y2022),
            "23" | "2023" => Ok(FiscalYear::Y2023),
            "24" | "2024" => Ok(FiscalYear::Y2024),
            other => Err(ParseValueError::FiscalYear(other.to_string())),
        }
    }
}

/// A financial value as it appears in the source data, before normalization.
///
/// The source mixes JSON numbers, strings with thousands separators,
/// empty strings, `null`, placeholder dashes and missing keys. Booleans,
/// arrays and objects are read as `Missing` rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    /// `null`, a missing key, or a value of any other JSON type
    #[default]
    Missing,
}

struct RawValueVisitor;

impl<'de> Visitor<'de> for RawValueVisitor {
    type Value = RawValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a financial figure")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<RawValue, E> {
        Ok(RawValue::Number(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<RawValue, E> {
        Ok(RawValue::Number(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<RawValue, E> {
        Ok(RawValue::Number(value as f64))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<RawValue, E> {
        Ok(RawValue::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<RawValue, E> {
        Ok(RawValue::Text(value))
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<RawValue, E> {
        Ok(RawValue::Missing)
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Missing)
    }

    fn visit_none<E: de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Missing)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<RawValue, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<RawValue, A::Error> {
        IgnoredAny.visit_seq(seq)?;
        Ok(RawValue::Missing)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<RawValue, A::Error> {
        IgnoredAny.visit_map(map)?;
        Ok(RawValue::Missing)
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawValueVisitor)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

/// Company record exactly as supplied by the static data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCompany {
    pub name: String,
    #[serde(default)]
    pub rev22: RawValue,
    #[serde(default)]
    pub profit22: RawValue,
    #[serde(default)]
    pub rev23: RawValue,
    #[serde(default)]
    pub profit23: RawValue,
    #[serde(default)]
    pub rev24: RawValue,
    #[serde(default)]
    pub profit24: RawValue,
}

/// Normalized company financials. Values are in 억원; `None` means absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Lookup key; uniqueness is assumed, not enforced
    pub name: String,
    /// Revenue indexed by `FiscalYear::index`
    pub revenue: [Option<f64>; 3],
    /// Operating profit indexed by `FiscalYear::index`
    pub profit: [Option<f64>; 3],
}

impl Company {
    pub fn revenue(&self, year: FiscalYear) -> Option<f64> {
        self.revenue[year.index()]
    }

    pub fn profit(&self, year: FiscalYear) -> Option<f64> {
        self.profit[year.index()]
    }
}

/// Year-over-year profit direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Table glyph
    pub fn glyph(self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Flat => "—",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Trend::Up => "trend-up",
            Trend::Down => "trend-down",
            Trend::Flat => "trend-flat",
        }
    }

    /// Human readable label used in the detail modal
    pub fn label(self) -> &'static str {
        match self {
            Trend::Up => "↑ 상승",
            Trend::Down => "↓ 하락",
            Trend::Flat => "— 유지",
        }
    }
}

/// Styling class of a financial figure. Zero counts as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericClass {
    Empty,
    Negative,
    Positive,
}

impl NumericClass {
    pub fn css_class(self) -> &'static str {
        match self {
            NumericClass::Empty => "num-empty",
            NumericClass::Negative => "num-negative",
            NumericClass::Positive => "num-positive",
        }
    }
}

/// Sortable table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortColumn {
    Name,
    Revenue(FiscalYear),
    Profit(FiscalYear),
    Trend,
}

impl SortColumn {
    /// Columns in table order
    pub const ALL: [SortColumn; 8] = [
        SortColumn::Name,
        SortColumn::Revenue(FiscalYear::Y2022),
        SortColumn::Profit(FiscalYear::Y2022),
        SortColumn::Revenue(FiscalYear::Y2023),
        SortColumn::Profit(FiscalYear::Y2023),
        SortColumn::Revenue(FiscalYear::Y2024),
        SortColumn::Profit(FiscalYear::Y2024),
        SortColumn::Trend,
    ];

    /// Header key, also the source field name for financial columns ("rev24")
    pub fn key(self) -> String {
        match self {
            SortColumn::Name => "name".to_string(),
            SortColumn::Revenue(year) => format!("rev{}", year.code()),
            SortColumn::Profit(year) => format!("profit{}", year.code()),
            SortColumn::Trend => "trend".to_string(),
        }
    }

    /// Header caption
    pub fn title(self) -> String {
        match self {
            SortColumn::Name => "기업명".to_string(),
            SortColumn::Revenue(year) => format!("{}년 매출", year.code()),
            SortColumn::Profit(year) => format!("{}년 영업이익", year.code()),
            SortColumn::Trend => "추세".to_string(),
        }
    }

    /// Direction applied when the column is selected for the first time
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortColumn::Name => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }
}

impl FromStr for SortColumn {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        match key {
            "name" => return Ok(SortColumn::Name),
            "trend" => return Ok(SortColumn::Trend),
            _ => {}
        }
        let parsed = if let Some(code) = key.strip_prefix("rev") {
            code.parse().ok().map(SortColumn::Revenue)
        } else if let Some(code) = key.strip_prefix("profit") {
            code.parse().ok().map(SortColumn::Profit)
        } else {
            None
        };
        parsed.ok_or_else(|| ParseValueError::SortColumn(key.to_string()))
    }
}

impl TryFrom<String> for SortColumn {
    type Error = ParseValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortColumn> for String {
    fn from(column: SortColumn) -> Self {
        column.key()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Class put on the header of the active sort column
    pub fn css_class(self) -> &'static str {
        match self {
            SortDirection::Asc => "sorted-asc",
            SortDirection::Desc => "sorted-desc",
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: SortColumn::Revenue(FiscalYear::LATEST),
            direction: SortDirection::Desc,
        }
    }
}

/// Profit/loss bucket filter applied to the active year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitFilter {
    #[default]
    All,
    Profit,
    Loss,
}

impl ProfitFilter {
    pub const ALL: [ProfitFilter; 3] = [ProfitFilter::All, ProfitFilter::Profit, ProfitFilter::Loss];

    /// Value carried by the filter select
    pub fn key(self) -> &'static str {
        match self {
            ProfitFilter::All => "all",
            ProfitFilter::Profit => "profit",
            ProfitFilter::Loss => "loss",
        }
    }
}

impl FromStr for ProfitFilter {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(ProfitFilter::All),
            "profit" => Ok(ProfitFilter::Profit),
            "loss" => Ok(ProfitFilter::Loss),
            other => Err(ParseValueError::ProfitFilter(other.to_string())),
        }
    }
}

/// Rows per page, or the "all" sentinel that disables pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSize {
    Limited(usize),
    All,
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Limited(20)
    }
}

impl FromStr for PageSize {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("all") {
            return Ok(PageSize::All);
        }
        match value.parse::<usize>() {
            Ok(size) if size > 0 => Ok(PageSize::Limited(size)),
            _ => Err(ParseValueError::PageSize(value.to_string())),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::Limited(size) => write!(f, "{}", size),
            PageSize::All => write!(f, "all"),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageSize::Limited(size) => serializer.serialize_u64(*size as u64),
            PageSize::All => serializer.serialize_str("all"),
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u64),
            Text(String),
        }

        let parsed = match Repr::deserialize(deserializer)? {
            Repr::Number(size) => size.to_string().parse::<PageSize>(),
            Repr::Text(text) => text.parse::<PageSize>(),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

/// Chart view mode of the detail modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    #[default]
    Revenue,
    Profit,
    Combined,
}

impl ChartMode {
    pub const ALL: [ChartMode; 3] = [ChartMode::Revenue, ChartMode::Profit, ChartMode::Combined];

    /// Value carried by the chart tab
    pub fn key(self) -> &'static str {
        match self {
            ChartMode::Revenue => "revenue",
            ChartMode::Profit => "profit",
            ChartMode::Combined => "combined",
        }
    }

    /// Tab caption
    pub fn label(self) -> &'static str {
        match self {
            ChartMode::Revenue => "매출",
            ChartMode::Profit => "영업이익",
            ChartMode::Combined => "매출 vs 이익",
        }
    }
}

impl FromStr for ChartMode {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "revenue" => Ok(ChartMode::Revenue),
            "profit" => Ok(ChartMode::Profit),
            "combined" => Ok(ChartMode::Combined),
            other => Err(ParseValueError::ChartMode(other.to_string())),
        }
    }
}

/// A formatted financial figure for a table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedCell {
    pub text: String,
    pub class: NumericClass,
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Company name, also the identity used to open the detail modal
    pub name: String,
    /// Six financial cells in table order: rev22, profit22, rev23, profit23, rev24, profit24
    pub cells: Vec<FormattedCell>,
    pub trend: Trend,
}

/// Pagination controls state for the rendered page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub current_page: usize,
    /// Page count as displayed, never below 1
    pub total_pages: usize,
    pub total_items: usize,
    /// Summary text, e.g. "2 / 3 (총 45개)"
    pub summary: String,
    pub has_previous: bool,
    pub has_next: bool,
}

impl Default for PaginationInfo {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_items: 0,
            summary: String::new(),
            has_previous: false,
            has_next: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatTone {
    Positive,
    Negative,
}

impl StatTone {
    pub fn css_class(self) -> &'static str {
        match self {
            StatTone::Positive => "change positive",
            StatTone::Negative => "change negative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatChange {
    pub text: String,
    pub tone: StatTone,
}

/// Summary card in the stats grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: Option<StatChange>,
}

/// Latest-year profitability of a company as shown in the detail modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfitStatus {
    Profit,
    Loss,
    Unknown,
}

impl ProfitStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProfitStatus::Profit => "흑자",
            ProfitStatus::Loss => "적자",
            ProfitStatus::Unknown => "데이터 없음",
        }
    }
}

/// Key figures of the company shown in the detail modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDetail {
    pub name: String,
    pub revenue_label: String,
    pub revenue_text: String,
    pub profit_label: String,
    pub profit_text: String,
    /// Latest profit is present and below zero
    pub profit_negative: bool,
    pub status: ProfitStatus,
    pub trend: Trend,
}

/// An RGBA colour; alpha in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// CSS representation, `#RRGGBB` when opaque and `rgba(..)` otherwise
    pub fn css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
}

/// Value axis identifier; `Left` is "y" and `Right` is "y1"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisId {
    Left,
    Right,
}

impl AxisId {
    pub fn key(self) -> &'static str {
        match self {
            AxisId::Left => "y",
            AxisId::Right => "y1",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAxis {
    pub id: AxisId,
    pub begin_at_zero: bool,
    pub title: Option<String>,
    /// Draw gridlines across the plotting area
    pub draw_grid: bool,
}

/// A bar series; colours are per bar and have the same length as `data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub fill: Vec<Rgba>,
    pub outline: Vec<Rgba>,
    pub border_width: u32,
    pub axis: AxisId,
}

/// Backend-independent chart description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub axes: Vec<ChartAxis>,
    pub show_legend: bool,
}

impl ChartSpec {
    pub fn axis(&self, id: AxisId) -> Option<&ChartAxis> {
        self.axes.iter().find(|axis| axis.id == id)
    }
}

/// Rejected value coming from a UI control or a config file
#[derive(Debug, Clone, PartialEq)]
pub enum ParseValueError {
    PageSize(String),
    SortColumn(String),
    FiscalYear(String),
    ProfitFilter(String),
    ChartMode(String),
}

impl fmt::Display for ParseValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseValueError::PageSize(v) => write!(f, "Invalid page size '{}'", v),
            ParseValueError::SortColumn(v) => write!(f, "Unknown sort column '{}'", v),
            ParseValueError::FiscalYear(v) => write!(f, "Unknown fiscal year '{}'", v),
            ParseValueError::ProfitFilter(v) => write!(f, "Unknown profit filter '{}'", v),
            ParseValueError::ChartMode(v) => write!(f, "Unknown chart mode '{}'", v),
        }
    }
}

impl std::error::Error for ParseValueError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fiscal_year_codes() {
        for year in FiscalYear::ALL {
            assert_eq!(year.code().parse::<FiscalYear>().unwrap(), year);
        }
        assert_eq!("2024".parse::<FiscalYear>().unwrap(), FiscalYear::Y2024);
        assert!("25".parse::<FiscalYear>().is_err());
        assert_eq!(FiscalYear::LATEST.label(), "2024년");
    }

    #[test]
    fn test_sort_column_keys() {
        for column in SortColumn::ALL {
            assert_eq!(column.key().parse::<SortColumn>().unwrap(), column);
        }
        assert_eq!(SortColumn::Profit(FiscalYear::Y2023).key(), "profit23");
        assert!(matches!(
            "rev21".parse::<SortColumn>(),
            Err(ParseValueError::SortColumn(_))
        ));
        assert!("revenue".parse::<SortColumn>().is_err());
    }

    #[test]
    fn test_sort_column_default_direction() {
        assert_eq!(SortColumn::Name.default_direction(), SortDirection::Asc);
        assert_eq!(SortColumn::Trend.default_direction(), SortDirection::Desc);
        assert_eq!(
            SortColumn::Revenue(FiscalYear::Y2022).default_direction(),
            SortDirection::Desc
        );
    }

    #[test]
    fn test_page_size_parsing() {
        assert_eq!("20".parse::<PageSize>().unwrap(), PageSize::Limited(20));
        assert_eq!("all".parse::<PageSize>().unwrap(), PageSize::All);
        assert!("0".parse::<PageSize>().is_err());
        assert!("abc".parse::<PageSize>().is_err());
        assert_eq!(PageSize::All.to_string(), "all");
    }

    #[test]
    fn test_page_size_serde() {
        let sizes: Vec<PageSize> = serde_json::from_str(r#"[10, "50", "all"]"#).unwrap();
        assert_eq!(sizes, vec![PageSize::Limited(10), PageSize::Limited(50), PageSize::All]);
        assert_eq!(serde_json::to_string(&sizes).unwrap(), r#"[10,50,"all"]"#);
        assert!(serde_json::from_str::<PageSize>("0").is_err());
    }

    #[test]
    fn test_raw_company_deserialization() {
        let raw: RawCompany = serde_json::from_str(
            r#"{"name": "Acme", "rev22": "1,234", "profit22": null, "rev23": 12.5, "profit23": "-"}"#,
        )
        .unwrap();

        assert_eq!(raw.rev22, RawValue::Text("1,234".to_string()));
        assert_eq!(raw.profit22, RawValue::Missing);
        assert_eq!(raw.rev23, RawValue::Number(12.5));
        assert_eq!(raw.profit23, RawValue::Text("-".to_string()));
        assert_eq!(raw.rev24, RawValue::Missing);
    }

    #[test]
    fn test_raw_value_of_other_json_types_is_missing() {
        let raw: RawCompany = serde_json::from_str(
            r#"{"name": "Acme", "rev22": true, "profit22": [1, 2], "rev23": {"value": 3}, "profit23": 7}"#,
        )
        .unwrap();

        assert_eq!(raw.rev22, RawValue::Missing);
        assert_eq!(raw.profit22, RawValue::Missing);
        assert_eq!(raw.rev23, RawValue::Missing);
        assert_eq!(raw.profit23, RawValue::Number(7.0));
    }

    #[test]
    fn test_sort_state_serde() {
        let state: SortState =
            serde_json::from_str(r#"{"column": "profit22", "direction": "asc"}"#).unwrap();
        assert_eq!(state.column, SortColumn::Profit(FiscalYear::Y2022));
        assert_eq!(state.direction, SortDirection::Asc);
        assert!(serde_json::from_str::<SortState>(r#"{"column": "x", "direction": "asc"}"#).is_err());
    }

    #[test]
    fn test_rgba_css() {
        assert_eq!(Rgba::opaque(0x99, 0x0F, 0x3D).css(), "#990F3D");
        assert_eq!(Rgba::new(153, 15, 61, 0.8).css(), "rgba(153, 15, 61, 0.8)");
    }

    #[test]
    fn test_select_keys_parse_back() {
        for filter in ProfitFilter::ALL {
            assert_eq!(filter.key().parse::<ProfitFilter>().unwrap(), filter);
        }
        for mode in ChartMode::ALL {
            assert_eq!(mode.key().parse::<ChartMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_parse_value_error_display() {
        let err = "weekly".parse::<ProfitFilter>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown profit filter 'weekly'");
    }
}
