#![forbid(unsafe_code)]

//! The upload/filter editor state machine.
//!
//! Idle → Editing (image picked) → Sharing (busy) → back to Idle.
//!
//! Filters and adjustments are purely presentational; nothing is ever
//! transmitted. Sharing simulates a fixed 2000 ms delay during which the
//! submit control is disabled; that disable-during-pending state is the
//! only mutual-exclusion concern in the whole system.

/// Simulated upload duration, in milliseconds.
pub const SHARE_DELAY_MS: u64 = 2000;
/// Caption length cap displayed in the editor.
pub const CAPTION_LIMIT: usize = 2200;

/// A named filter preset. Purely presentational; the renderer maps the
/// name to whatever styling it can manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterPreset {
    pub name: &'static str,
}

/// The eight presets, in picker order.
pub const FILTER_PRESETS: &[FilterPreset] = &[
    FilterPreset { name: "Original" },
    FilterPreset { name: "Vintage" },
    FilterPreset { name: "Noir" },
    FilterPreset { name: "Warm" },
    FilterPreset { name: "Cool" },
    FilterPreset { name: "Vibrant" },
    FilterPreset { name: "Fade" },
    FilterPreset { name: "Drama" },
];

/// Slider-style adjustments, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustments {
    pub brightness: u16,
    pub contrast: u16,
    pub saturation: u16,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            brightness: 100,
            contrast: 100,
            saturation: 100,
        }
    }
}

impl Adjustments {
    /// Brightness and contrast range over 50–200, saturation over 0–200.
    const BRIGHTNESS_RANGE: (u16, u16) = (50, 200);
    const CONTRAST_RANGE: (u16, u16) = (50, 200);
    const SATURATION_RANGE: (u16, u16) = (0, 200);

    fn step(value: u16, delta: i16, range: (u16, u16)) -> u16 {
        value.saturating_add_signed(delta).clamp(range.0, range.1)
    }

    pub fn adjust_brightness(&mut self, delta: i16) {
        self.brightness = Self::step(self.brightness, delta, Self::BRIGHTNESS_RANGE);
    }

    pub fn adjust_contrast(&mut self, delta: i16) {
        self.contrast = Self::step(self.contrast, delta, Self::CONTRAST_RANGE);
    }

    pub fn adjust_saturation(&mut self, delta: i16) {
        self.saturation = Self::step(self.saturation, delta, Self::SATURATION_RANGE);
    }
}

/// The editor phases.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadPhase {
    /// No image picked yet.
    Idle,
    /// An image is picked and being edited.
    Editing,
    /// Share in flight; inputs are disabled until completion.
    Sharing,
}

/// Upload editor state machine.
#[derive(Debug, Clone)]
pub struct UploadEditor {
    phase: UploadPhase,
    image: Option<String>,
    caption: String,
    filter_index: usize,
    adjustments: Adjustments,
}

impl Default for UploadEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadEditor {
    pub fn new() -> Self {
        Self {
            phase: UploadPhase::Idle,
            image: None,
            caption: String::new(),
            filter_index: 0,
            adjustments: Adjustments::default(),
        }
    }

    pub fn phase(&self) -> &UploadPhase {
        &self.phase
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn filter_index(&self) -> usize {
        self.filter_index
    }

    pub fn filter(&self) -> FilterPreset {
        FILTER_PRESETS[self.filter_index]
    }

    pub fn adjustments(&self) -> Adjustments {
        self.adjustments
    }

    pub fn is_sharing(&self) -> bool {
        self.phase == UploadPhase::Sharing
    }

    /// Pick an image, entering the editing phase. Ignored while sharing.
    pub fn pick_image(&mut self, image: impl Into<String>) {
        if self.is_sharing() {
            return;
        }
        self.image = Some(image.into());
        self.phase = UploadPhase::Editing;
    }

    /// Discard the picked image and reset every editing control.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn select_filter(&mut self, index: usize) {
        if !self.is_sharing() && index < FILTER_PRESETS.len() {
            self.filter_index = index;
        }
    }

    pub fn cycle_filter(&mut self) {
        if !self.is_sharing() {
            self.filter_index = (self.filter_index + 1) % FILTER_PRESETS.len();
        }
    }

    pub fn adjustments_mut(&mut self) -> Option<&mut Adjustments> {
        if self.phase == UploadPhase::Editing {
            Some(&mut self.adjustments)
        } else {
            None
        }
    }

    pub fn caption_push(&mut self, c: char) {
        if self.phase == UploadPhase::Editing && self.caption.chars().count() < CAPTION_LIMIT {
            self.caption.push(c);
        }
    }

    pub fn caption_pop(&mut self) {
        if self.phase == UploadPhase::Editing {
            self.caption.pop();
        }
    }

    /// Begin sharing. Returns `true` when the share actually started; a
    /// second call while already sharing (or without an image) is refused,
    /// which is what keeps the action non-reentrant.
    pub fn begin_share(&mut self) -> bool {
        if self.phase != UploadPhase::Editing {
            return false;
        }
        self.phase = UploadPhase::Sharing;
        tracing::info!("upload share started");
        true
    }

    /// Complete the simulated upload: toast text, then a full reset.
    pub fn finish_share(&mut self) -> &'static str {
        self.reset();
        tracing::info!("upload share finished");
        "Post shared successfully! Your post has been shared with your followers."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let editor = UploadEditor::new();
        assert_eq!(*editor.phase(), UploadPhase::Idle);
        assert!(editor.image().is_none());
    }

    #[test]
    fn pick_image_enters_editing() {
        let mut editor = UploadEditor::new();
        editor.pick_image("sample");
        assert_eq!(*editor.phase(), UploadPhase::Editing);
        assert_eq!(editor.image(), Some("sample"));
    }

    #[test]
    fn share_requires_editing_phase() {
        let mut editor = UploadEditor::new();
        assert!(!editor.begin_share());
        editor.pick_image("sample");
        assert!(editor.begin_share());
    }

    #[test]
    fn share_is_not_reentrant() {
        let mut editor = UploadEditor::new();
        editor.pick_image("sample");
        assert!(editor.begin_share());
        assert!(!editor.begin_share(), "second submit must be refused");
        assert!(editor.is_sharing());
    }

    #[test]
    fn inputs_disabled_while_sharing() {
        let mut editor = UploadEditor::new();
        editor.pick_image("sample");
        editor.begin_share();
        editor.cycle_filter();
        assert_eq!(editor.filter_index(), 0);
        assert!(editor.adjustments_mut().is_none());
        editor.caption_push('x');
        assert!(editor.caption().is_empty());
    }

    #[test]
    fn finish_share_resets_everything() {
        let mut editor = UploadEditor::new();
        editor.pick_image("sample");
        editor.select_filter(3);
        editor.caption_push('h');
        editor.adjustments_mut().unwrap().adjust_brightness(25);
        editor.begin_share();

        let toast = editor.finish_share();
        assert!(toast.starts_with("Post shared successfully!"));
        assert_eq!(*editor.phase(), UploadPhase::Idle);
        assert!(editor.image().is_none());
        assert!(editor.caption().is_empty());
        assert_eq!(editor.filter_index(), 0);
        assert_eq!(editor.adjustments(), Adjustments::default());
    }

    #[test]
    fn adjustments_clamp_to_ranges() {
        let mut adj = Adjustments::default();
        adj.adjust_brightness(1000);
        assert_eq!(adj.brightness, 200);
        adj.adjust_brightness(-1000);
        assert_eq!(adj.brightness, 50);
        adj.adjust_saturation(-1000);
        assert_eq!(adj.saturation, 0);
        adj.adjust_contrast(-1000);
        assert_eq!(adj.contrast, 50);
    }

    #[test]
    fn filter_cycle_wraps() {
        let mut editor = UploadEditor::new();
        editor.pick_image("sample");
        for _ in 0..FILTER_PRESETS.len() {
            editor.cycle_filter();
        }
        assert_eq!(editor.filter_index(), 0);
    }

    #[test]
    fn caption_respects_limit() {
        let mut editor = UploadEditor::new();
        editor.pick_image("sample");
        for _ in 0..CAPTION_LIMIT + 10 {
            editor.caption_push('a');
        }
        assert_eq!(editor.caption().chars().count(), CAPTION_LIMIT);
    }
}
