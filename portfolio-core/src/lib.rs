//! Dữ liệu và logic lõi cho trang portfolio các cột mốc nghề nghiệp.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

mod presentation;

pub use presentation::{status_text, Card, ModalState, Presentation, Reveal, Theme, Unflip};

/// Bài học trả về khi không có vai trò nào khớp.
pub const FALLBACK_LESSON: &str = "Every role is a lesson - keep learning.";

/// Dòng mở đầu của bản tóm tắt bài học in ra lúc khởi động.
pub const SUMMARY_HEADER: &str = "Quick lessons summary:";

/// Gợi ý tĩnh hiển thị trên mặt trước của mỗi thẻ.
pub const CARD_HINT: &str = "Click to flip";

/// Class gắn lên phần tử gốc của document khi bật giao diện tối.
pub const DARK_THEME_CLASS: &str = "dark";

const JOURNEY: [(&str, &str, &str, &str); 6] = [
    (
        "Java House - Barista",
        "https://picsum.photos/seed/coffee/600/400",
        "Serving coffee taught me consistency, attention to detail, and the importance of customer experience.",
        "Customer-first thinking is the foundation of product design.",
    ),
    (
        "Fremara Solutions - Sales",
        "https://picsum.photos/seed/sales/600/400",
        "Door-to-door and pitch-heavy sales strengthened my persuasion and resilience.",
        "Persistence + clear messaging moves people to action.",
    ),
    (
        "Nyumbani Concepts - Real Estate",
        "https://picsum.photos/seed/realestate/600/400",
        "Selling property taught me negotiation and the value of clear visuals and trust.",
        "Good presentation accelerates decisions.",
    ),
    (
        "CarPlanet → PlanetAuto - Social Media",
        "https://picsum.photos/seed/cars/600/400",
        "Running social channels showed me the power of storytelling and community.",
        "Content that resonates builds loyalty.",
    ),
    (
        "Uber - Operations",
        "https://picsum.photos/seed/uber/600/400",
        "At Uber I learned to think in systems and the importance of reliable processes.",
        "Scale needs process and data.",
    ),
    (
        "JuaKazi - Founder (building)",
        "https://picsum.photos/seed/jua/600/400",
        "Now building tech to connect people with work: combining everything I've learned so far.",
        "Solve clear problems for real people.",
    ),
];

/// Một cột mốc trong hành trình nghề nghiệp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneRecord {
    /// Nhãn hiển thị, đồng thời là khóa tra cứu.
    pub role: String,
    #[serde(alias = "img")]
    pub image_url: String,
    pub summary: String,
    pub lesson: String,
}

impl MilestoneRecord {
    pub fn new(
        role: impl Into<String>,
        image_url: impl Into<String>,
        summary: impl Into<String>,
        lesson: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            image_url: image_url.into(),
            summary: summary.into(),
            lesson: lesson.into(),
        }
    }

    /// Văn bản alt cho ảnh trên mặt trước của thẻ.
    pub fn image_alt(&self) -> String {
        format!("{} image", self.role)
    }
}

/// Danh sách cột mốc đã kiểm tra: không rỗng, `role` không trùng.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct MilestoneList {
    records: Vec<MilestoneRecord>,
}

impl MilestoneList {
    /// Sáu cột mốc dựng sẵn của trang.
    pub fn journey() -> Self {
        let records = JOURNEY
            .iter()
            .map(|(role, image_url, summary, lesson)| {
                MilestoneRecord::new(*role, *image_url, *summary, *lesson)
            })
            .collect();
        Self { records }
    }

    pub fn new(records: Vec<MilestoneRecord>) -> Result<Self, PortfolioError> {
        if records.is_empty() {
            return Err(PortfolioError::Empty);
        }

        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.role.as_str()) {
                return Err(PortfolioError::DuplicateRole(record.role.clone()));
            }
        }

        Ok(Self { records })
    }

    /// Đọc danh sách từ chuỗi JSON (mảng các bản ghi).
    pub fn from_json_str(input: &str) -> Result<Self, PortfolioError> {
        let records: Vec<MilestoneRecord> =
            serde_json::from_str(input).map_err(|err| PortfolioError::Parse(err.to_string()))?;
        Self::new(records)
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self, PortfolioError> {
        let records: Vec<MilestoneRecord> =
            serde_json::from_value(value).map_err(|err| PortfolioError::Parse(err.to_string()))?;
        Self::new(records)
    }

    pub fn records(&self) -> &[MilestoneRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MilestoneRecord> {
        self.records.get(index)
    }

    /// Bài học của bản ghi đầu tiên có `role` khớp chính xác, ngược lại là
    /// [`FALLBACK_LESSON`].
    pub fn lesson_for_role(&self, role_name: &str) -> &str {
        self.records
            .iter()
            .find(|record| record.role == role_name)
            .map(|record| record.lesson.as_str())
            .unwrap_or(FALLBACK_LESSON)
    }

    /// Mỗi dòng dạng `"<role> -> <lesson>"`, theo thứ tự danh sách.
    pub fn lesson_summary(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| format!("{} -> {}", record.role, self.lesson_for_role(&record.role)))
            .collect()
    }
}

impl Default for MilestoneList {
    fn default() -> Self {
        Self::journey()
    }
}

impl<'de> Deserialize<'de> for MilestoneList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<MilestoneRecord>::deserialize(deserializer)?;
        Self::new(records).map_err(serde::de::Error::custom)
    }
}

/// Cấu hình hành vi trình bày.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PresentationConfig {
    /// Thời gian (ms) thẻ giữ trạng thái lật sau mỗi lần "reveal next".
    pub reveal_flip_ms: u32,
    /// In bản tóm tắt bài học ra console lúc khởi động.
    pub log_summary: bool,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            reveal_flip_ms: 2200,
            log_summary: true,
        }
    }
}

/// Lỗi chung của portfolio.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("Danh sách cột mốc không được rỗng")]
    Empty,
    #[error("Vai trò bị trùng lặp: {0}")]
    DuplicateRole(String),
    #[error("Không đọc được dữ liệu: {0}")]
    Parse(String),
}
