// Copyright 2026 the Rollcall Authors
// SPDX-License-Identifier: Apache-2.0

use crate::Result;
use crate::util::document;

const STYLE_ID: &str = "rollcall-styles";

/// Rules for the classes the enhancements add; the site stylesheet supplies
/// the `slideUp` and `fadeIn` keyframes.
const RULES: &str = "
.btn { position: relative; overflow: hidden; }
.ripple {
  position: absolute;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.5);
  transform: scale(0);
  animation: ripple-animation 0.6s ease-out;
  pointer-events: none;
}
@keyframes ripple-animation { to { transform: scale(4); opacity: 0; } }
.animated { animation: slideUp 0.5s ease-out forwards; }
tbody tr.table-active { background-color: var(--primary); color: white; }
tbody tr.table-active a { color: white; }
.skip-to-content {
  position: absolute;
  top: -40px;
  left: 0;
  background: var(--primary);
  color: white;
  padding: 8px;
  text-decoration: none;
  z-index: 100;
}
.skip-to-content:focus { top: 0; }
.collapse { overflow: hidden; transition: max-height 0.3s ease-out; max-height: 0; }
.collapse.show { max-height: 1000px; }
@media (max-width: 768px) { .collapse { max-height: none !important; } }
";

/// Adds the rules to `head`, once per page.
pub(crate) fn inject() -> Result<()> {
    let document = document();
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or(crate::Error::MissingElement("head"))?;
    let style = document.create_element("style")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(RULES));
    head.append_child(&style)?;
    Ok(())
}
