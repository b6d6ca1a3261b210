//! Staggered entrance for result images.
//!
//! Once the document is parsed, every `img` under `.images` is hidden with
//! a small downward offset. When an image finishes loading it waits
//! `index × 80` ms, then fades and slides into place, so a row of images
//! cascades in DOM order. Images already complete (served from cache) are
//! handled right away instead of waiting for a load event that has already
//! fired.
//!
//! The next animation frame after ready also marks `<body>` with `ready`
//! for the stylesheet's header entrance.

#[cfg(test)]
#[path = "image_reveal_test.rs"]
mod image_reveal_test;

use std::rc::Rc;

/// Delay between consecutive images, in milliseconds.
pub const STAGGER_MS: u32 = 80;

/// Class added to `<body>` one frame after the document is ready.
pub const READY_CLASS: &str = "ready";

/// Inline style applied to a revealed image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
    /// Set before `opacity`/`transform` so the change animates.
    pub transition: Option<&'static str>,
}

impl RevealStyle {
    pub const HIDDEN: Self = Self { opacity: "0", transform: "translateY(6px)", transition: None };

    pub const SHOWN: Self = Self {
        opacity: "1",
        transform: "none",
        transition: Some("opacity .5s ease, transform .5s cubic-bezier(.2,.9,.2,1)"),
    };
}

/// Page surface the reveal controller drives.
pub trait RevealHost {
    /// Handle to one image element.
    type Image: Clone + 'static;

    /// Images inside the `.images` container, in DOM order.
    fn reveal_images(&self) -> Vec<Self::Image>;
    fn set_image_style(&self, image: &Self::Image, style: &RevealStyle);
    /// Whether the image has already finished loading.
    fn image_complete(&self, image: &Self::Image) -> bool;
    /// Run `handler` whenever the image fires `load`.
    fn on_image_load(&self, image: &Self::Image, handler: Rc<dyn Fn()>);
    /// Run `task` once after `delay_ms` milliseconds.
    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
    /// Run `task` on the next animation frame.
    fn request_frame(&self, task: Box<dyn FnOnce()>);
    fn add_body_class(&self, class: &str);
    /// Run `task` once the document is parsed; immediately if it already is.
    fn on_content_ready(&self, task: Box<dyn FnOnce()>);
}

/// Stagger delay for the image at `index`.
#[must_use]
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_MS)
}

/// Hide every image and schedule its staggered reveal.
pub fn reveal_images<H: RevealHost + 'static>(page: &Rc<H>) {
    for (index, image) in page.reveal_images().into_iter().enumerate() {
        page.set_image_style(&image, &RevealStyle::HIDDEN);

        let delay = stagger_delay_ms(index);
        let handler: Rc<dyn Fn()> = {
            let page = Rc::clone(page);
            let image = image.clone();
            Rc::new(move || {
                let target = Rc::clone(&page);
                let image = image.clone();
                page.set_timeout(
                    delay,
                    Box::new(move || target.set_image_style(&image, &RevealStyle::SHOWN)),
                );
            })
        };

        page.on_image_load(&image, Rc::clone(&handler));
        if page.image_complete(&image) {
            handler();
        }
    }
}

/// Mark `<body>` ready on the next animation frame.
pub fn mark_ready<H: RevealHost + 'static>(page: &Rc<H>) {
    let target = Rc::clone(page);
    page.request_frame(Box::new(move || target.add_body_class(READY_CLASS)));
}

/// Defer the reveal and the ready marker until the document is parsed.
pub fn install<H: RevealHost + 'static>(page: &Rc<H>) {
    let ready = Rc::clone(page);
    page.on_content_ready(Box::new(move || {
        reveal_images(&ready);
        mark_ready(&ready);
    }));
}
