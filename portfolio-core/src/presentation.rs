use std::time::Duration;

use crate::{MilestoneList, MilestoneRecord, PresentationConfig, DARK_THEME_CLASS};

/// Nội dung dòng trạng thái sau mỗi lần "reveal next".
pub fn status_text(role: &str, lesson: &str) -> String {
    format!("Next: {role} — {lesson}")
}

/// Giao diện sáng/tối của trang.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Class của phần tử gốc và việc nó có được bật hay không.
    pub fn root_class_toggle(self) -> (&'static str, bool) {
        (DARK_THEME_CLASS, self.is_dark())
    }

    /// Giá trị `aria-pressed` của nút chuyển giao diện.
    pub fn aria_pressed(self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }
}

/// Trạng thái hộp thoại trích dẫn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

impl ModalState {
    pub fn is_open(self) -> bool {
        self == ModalState::Open
    }

    pub fn css_class(self) -> Option<&'static str> {
        self.is_open().then_some("show")
    }

    pub fn aria_hidden(self) -> &'static str {
        if self.is_open() {
            "false"
        } else {
            "true"
        }
    }
}

/// Một thẻ đã render, ứng với bản ghi tại `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub index: usize,
    pub flipped: bool,
}

/// Tác vụ trì hoãn: úp lại thẻ `index` sau `after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unflip {
    pub index: usize,
    pub after: Duration,
}

/// Kết quả một lần "reveal next".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    pub index: usize,
    pub role: String,
    pub lesson: String,
    pub status: String,
    /// `None` khi chưa có thẻ nào mang `index` tương ứng.
    pub unflip: Option<Unflip>,
}

/// Bộ điều khiển trình bày: giữ con trỏ, các thẻ và hai công tắc giao diện.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    milestones: MilestoneList,
    config: PresentationConfig,
    cursor: usize,
    cards: Vec<Card>,
    status: Option<String>,
    theme: Theme,
    modal: ModalState,
}

impl Presentation {
    pub fn new(milestones: MilestoneList, config: PresentationConfig) -> Self {
        Self {
            milestones,
            config,
            cursor: 0,
            cards: Vec::new(),
            status: None,
            theme: Theme::default(),
            modal: ModalState::default(),
        }
    }

    pub fn milestones(&self) -> &MilestoneList {
        &self.milestones
    }

    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.iter().find(|card| card.index == index)
    }

    /// Các thẻ kèm bản ghi của chúng, theo thứ tự hiển thị.
    pub fn card_views(&self) -> impl Iterator<Item = (&Card, &MilestoneRecord)> {
        self.cards
            .iter()
            .filter_map(move |card| self.milestones.get(card.index).map(|record| (card, record)))
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn lesson_for_role(&self, role_name: &str) -> &str {
        self.milestones.lesson_for_role(role_name)
    }

    /// Bỏ toàn bộ thẻ cũ rồi dựng lại một thẻ (chưa lật) cho mỗi bản ghi.
    pub fn render_cards(&mut self) -> &[Card] {
        self.cards.clear();
        self.cards.extend((0..self.milestones.len()).map(|index| Card {
            index,
            flipped: false,
        }));
        &self.cards
    }

    /// Lật thẻ `index`; trả về trạng thái mới, hoặc `None` nếu không có thẻ đó.
    pub fn toggle_card(&mut self, index: usize) -> Option<bool> {
        let card = self.card_mut(index)?;
        card.flipped = !card.flipped;
        Some(card.flipped)
    }

    /// Gỡ trạng thái lật của thẻ `index` (phần trì hoãn của "reveal next").
    pub fn settle_card(&mut self, index: usize) -> bool {
        match self.card_mut(index) {
            Some(card) => {
                let was_flipped = card.flipped;
                card.flipped = false;
                was_flipped
            }
            None => false,
        }
    }

    pub fn reveal_next(&mut self) -> Reveal {
        let index = self.cursor % self.milestones.len();
        let role = self
            .milestones
            .get(index)
            .map(|record| record.role.clone())
            .unwrap_or_default();
        let lesson = self.lesson_for_role(&role).to_string();

        let after = Duration::from_millis(u64::from(self.config.reveal_flip_ms));
        let unflip = self.card_mut(index).map(|card| {
            card.flipped = true;
            Unflip { index, after }
        });

        let status = status_text(&role, &lesson);
        self.status = Some(status.clone());
        self.cursor = self.cursor.wrapping_add(1);

        Reveal {
            index,
            role,
            lesson,
            status,
            unflip,
        }
    }

    pub fn open_modal(&mut self) {
        self.modal = ModalState::Open;
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Xử lý phím toàn cục; `true` nếu phím được dùng (Escape đóng hộp thoại).
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" {
            self.close_modal();
            true
        } else {
            false
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    fn card_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.index == index)
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new(MilestoneList::journey(), PresentationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_before_render_skips_the_card() {
        let mut presentation = Presentation::default();
        let reveal = presentation.reveal_next();
        assert_eq!(reveal.index, 0);
        assert_eq!(reveal.unflip, None);
        assert_eq!(presentation.cursor(), 1);
        assert!(presentation.status_text().is_some());
    }

    #[test]
    fn reveal_schedules_configured_unflip() {
        let config = PresentationConfig {
            reveal_flip_ms: 500,
            ..PresentationConfig::default()
        };
        let mut presentation = Presentation::new(MilestoneList::journey(), config);
        presentation.render_cards();

        let reveal = presentation.reveal_next();
        assert_eq!(
            reveal.unflip,
            Some(Unflip {
                index: 0,
                after: Duration::from_millis(500),
            })
        );
        assert_eq!(presentation.card(0).map(|card| card.flipped), Some(true));

        assert!(presentation.settle_card(0));
        assert!(!presentation.settle_card(0));
        assert_eq!(presentation.card(0).map(|card| card.flipped), Some(false));
    }

    #[test]
    fn overlapping_unflips_are_harmless() {
        let mut presentation = Presentation::default();
        presentation.render_cards();
        let len = presentation.milestones().len();

        let first = presentation.reveal_next();
        for _ in 1..len {
            presentation.reveal_next();
        }
        let second = presentation.reveal_next();
        assert_eq!(first.index, second.index);

        presentation.settle_card(first.index);
        presentation.settle_card(second.index);
        assert_eq!(presentation.card(0).map(|card| card.flipped), Some(false));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let mut presentation = Presentation::default();
        presentation.open_modal();
        assert!(!presentation.handle_key("Enter"));
        assert!(presentation.modal().is_open());
    }

    #[test]
    fn toggle_unknown_card_is_none() {
        let mut presentation = Presentation::default();
        presentation.render_cards();
        assert_eq!(presentation.toggle_card(99), None);
    }
}
