//! Classifier Module - Is the element under the pointer interactive?
//!
//! Hit-testing is injected through [`HitTester`], so the classifier runs the
//! same against a laid-out [`Scene`](super::scene::Scene) or any closure
//! `Fn(Point) -> Option<Target>`.

use crate::types::{ElementTag, Point, Role, Target};

/// "What element is at point P?"
pub trait HitTester {
    /// The topmost element at `point`, or `None` when nothing is there.
    fn hit_test(&self, point: Point) -> Option<Target>;
}

impl<F> HitTester for F
where
    F: Fn(Point) -> Option<Target>,
{
    fn hit_test(&self, point: Point) -> Option<Target> {
        self(point)
    }
}

/// Tags that accept direct user action.
pub const INTERACTIVE_TAGS: [ElementTag; 5] = [
    ElementTag::Anchor,
    ElementTag::Button,
    ElementTag::Input,
    ElementTag::TextArea,
    ElementTag::Select,
];

impl Target {
    /// Interactive tag, or an explicit `button` role on any element.
    ///
    /// Other roles do not count: `role="link"` on a span stays plain.
    pub fn is_interactive(&self) -> bool {
        INTERACTIVE_TAGS.contains(&self.tag) || self.role == Some(Role::Button)
    }
}

/// Classify the element at `point`.
///
/// Returns `None` when hit-testing finds nothing; callers keep their
/// previous classification in that case.
pub fn classify(hit_tester: &dyn HitTester, point: Point) -> Option<bool> {
    let target = hit_tester.hit_test(point)?;
    let interactive = target.is_interactive();
    tracing::trace!(x = point.x, y = point.y, ?target, interactive, "classified");
    Some(interactive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_tags() {
        for tag in INTERACTIVE_TAGS {
            assert!(Target::new(tag).is_interactive(), "{tag:?} should be interactive");
        }
    }

    #[test]
    fn test_plain_tags() {
        for tag in [
            ElementTag::Heading,
            ElementTag::Paragraph,
            ElementTag::Span,
            ElementTag::Image,
            ElementTag::Div,
            ElementTag::Section,
            ElementTag::Form,
        ] {
            assert!(!Target::new(tag).is_interactive(), "{tag:?} should be plain");
        }
    }

    #[test]
    fn test_button_role_is_interactive() {
        assert!(Target::with_role(ElementTag::Div, Role::Button).is_interactive());
        assert!(Target::with_role(ElementTag::Span, Role::Button).is_interactive());
    }

    #[test]
    fn test_other_roles_stay_plain() {
        assert!(!Target::with_role(ElementTag::Span, Role::Link).is_interactive());
        assert!(!Target::with_role(ElementTag::Div, Role::Navigation).is_interactive());
        // An interactive tag stays interactive whatever its role
        assert!(Target::with_role(ElementTag::Anchor, Role::Img).is_interactive());
    }

    #[test]
    fn test_classify_with_fake_hit_tester() {
        let fake = |point: Point| match point.x {
            0..=9 => Some(Target::new(ElementTag::Button)),
            10..=19 => Some(Target::new(ElementTag::Paragraph)),
            _ => None,
        };

        assert_eq!(classify(&fake, Point::new(5, 0)), Some(true));
        assert_eq!(classify(&fake, Point::new(15, 0)), Some(false));
        assert_eq!(classify(&fake, Point::new(25, 0)), None);
    }

    #[test]
    fn test_classify_through_shared_hit_tester() {
        use std::cell::RefCell;
        use std::rc::Rc;

        // A swappable hit tester, the way a relaid-out page is shared
        let current = Rc::new(RefCell::new(Target::new(ElementTag::Paragraph)));
        let current_clone = current.clone();
        let shared = move |_: Point| Some(*current_clone.borrow());

        assert_eq!(classify(&shared, Point::new(0, 0)), Some(false));
        *current.borrow_mut() = Target::new(ElementTag::TextArea);
        assert_eq!(classify(&shared, Point::new(0, 0)), Some(true));
    }
}
