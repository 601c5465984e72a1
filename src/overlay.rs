use crate::constants::{EXITING_CLASS, HIDDEN_CLASS};
use web_sys as web;

#[inline]
pub fn show(el: &web::Element) {
    _ = el.class_list().remove_2(HIDDEN_CLASS, EXITING_CLASS);
    _ = el.remove_attribute("aria-hidden");
}

/// Start the fade-out; the element stays in layout until [`hide`].
#[inline]
pub fn begin_exit(el: &web::Element) {
    _ = el.class_list().add_1(EXITING_CLASS);
}

#[inline]
pub fn hide(el: &web::Element) {
    let cl = el.class_list();
    _ = cl.remove_1(EXITING_CLASS);
    _ = cl.add_1(HIDDEN_CLASS);
    _ = el.set_attribute("aria-hidden", "true");
}
