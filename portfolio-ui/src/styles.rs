#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-portfolio-ui]";

/// Default CSS for the page; flip, modal and theme states are plain class toggles.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --portfolio-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --portfolio-bg: #f8fafc;
  --portfolio-surface: #ffffff;
  --portfolio-text: #1f2933;
  --portfolio-muted: #52606d;
  --portfolio-accent: #2563eb;
  --portfolio-accent-text: #ffffff;
  --portfolio-border: rgba(148, 163, 184, 0.28);
  --portfolio-back: #0f172a;
  --portfolio-back-text: #f8fafc;
  --portfolio-radius: 16px;
  --portfolio-flip-duration: 0.6s;
}

:root.dark {
  --portfolio-bg: #0b1120;
  --portfolio-surface: #111827;
  --portfolio-text: #e5e7eb;
  --portfolio-muted: #9ca3af;
  --portfolio-accent: #60a5fa;
  --portfolio-accent-text: #0b1120;
  --portfolio-border: rgba(148, 163, 184, 0.18);
  --portfolio-back: #1e3a8a;
  --portfolio-back-text: #e0e7ff;
}

body {
  margin: 0;
  background: var(--portfolio-bg);
  color: var(--portfolio-text);
  transition: background 0.3s ease, color 0.3s ease;
}

.portfolio-root {
  font-family: var(--portfolio-font-family);
  max-width: 1120px;
  margin: 0 auto;
  padding: 24px;
}

.site-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding-bottom: 16px;
  border-bottom: 1px solid var(--portfolio-border);
}

.brand {
  font-weight: 700;
  letter-spacing: 0.02em;
}

.btn,
.theme-toggle {
  font: inherit;
  cursor: pointer;
  border-radius: 999px;
  padding: 8px 18px;
  border: 1px solid var(--portfolio-accent);
  background: var(--portfolio-accent);
  color: var(--portfolio-accent-text);
}

.btn-ghost,
.theme-toggle {
  background: transparent;
  color: var(--portfolio-accent);
}

.theme-toggle[aria-pressed="true"] {
  background: var(--portfolio-accent);
  color: var(--portfolio-accent-text);
}

.hero {
  padding: 40px 0 28px;
}

.hero h1 {
  margin: 0 0 12px;
  font-size: clamp(1.8rem, 4vw, 2.6rem);
}

.hero p {
  color: var(--portfolio-muted);
  min-height: 1.5em;
}

.hero-actions {
  display: flex;
  gap: 12px;
  flex-wrap: wrap;
}

.card-grid {
  display: grid;
  gap: 22px;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
}

.card {
  perspective: 1200px;
  min-height: 360px;
}

.card-inner {
  position: relative;
  width: 100%;
  height: 100%;
  min-height: 360px;
  cursor: pointer;
  transform-style: preserve-3d;
  transition: transform var(--portfolio-flip-duration) ease;
}

.card-inner.is-flipped {
  transform: rotateY(180deg);
}

.card-front,
.card-back {
  position: absolute;
  inset: 0;
  backface-visibility: hidden;
  border-radius: var(--portfolio-radius);
  border: 1px solid var(--portfolio-border);
  overflow: hidden;
  box-shadow: 0 18px 36px rgba(15, 23, 42, 0.08);
}

.card-front {
  background: var(--portfolio-surface);
  display: flex;
  flex-direction: column;
}

.card-front img {
  width: 100%;
  height: 160px;
  object-fit: cover;
}

.card-front h3 {
  margin: 14px 16px 6px;
  font-size: 1.05rem;
}

.card-front p {
  margin: 0 16px;
  color: var(--portfolio-muted);
  font-size: 0.92rem;
  line-height: 1.45;
}

.pill {
  margin: auto 16px 16px;
  align-self: flex-start;
  font-size: 0.75rem;
  font-weight: 600;
  padding: 4px 10px;
  border-radius: 999px;
  background: rgba(37, 99, 235, 0.12);
  color: var(--portfolio-accent);
}

.card-back {
  transform: rotateY(180deg);
  background: var(--portfolio-back);
  color: var(--portfolio-back-text);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 24px;
  text-align: center;
  font-size: 1.1rem;
  font-weight: 600;
}

.modal {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(15, 23, 42, 0.55);
  opacity: 0;
  visibility: hidden;
  transition: opacity 0.25s ease, visibility 0.25s ease;
}

.modal.show {
  opacity: 1;
  visibility: visible;
}

.modal-content {
  background: var(--portfolio-surface);
  color: var(--portfolio-text);
  border-radius: var(--portfolio-radius);
  padding: 28px;
  max-width: 440px;
  width: calc(100% - 48px);
  transform: translateY(12px);
  transition: transform 0.25s ease;
}

.modal.show .modal-content {
  transform: translateY(0);
}

.modal-content blockquote {
  margin: 12px 0 20px;
  font-style: italic;
}

.modal-content cite {
  display: block;
  margin-top: 8px;
  color: var(--portfolio-muted);
}

@media (prefers-reduced-motion: reduce) {
  .card-inner,
  .modal,
  .modal-content {
    transition: none;
  }
}

@media (max-width: 640px) {
  .portfolio-root {
    padding: 16px;
  }

  .hero-actions .btn {
    width: 100%;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-portfolio-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.dyn_into::<Node>()?)?;

    Ok(())
}
