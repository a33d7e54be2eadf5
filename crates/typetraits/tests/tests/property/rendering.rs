//! Property tests: rendering is deterministic and partial only on the two
//! constructor conflicts.

use proptest::prelude::*;
use typetraits_render::{inheritance_fragment, render, RenderConfig, RenderError};
use typetraits_tests::{arb_attribute_set, arb_flags_for};
use typetraits_types::{Attribute, TypeClass};

fn style_count(set: &typetraits_types::AttributeSet) -> usize {
    [
        Attribute::HasUserProvidedDefaultConstr,
        Attribute::HasInheritedDefaultConstr,
        Attribute::HasExplicitDefaultConstr,
    ]
    .iter()
    .filter(|a| set.get(**a))
    .count()
}

proptest! {
    /// Identical sets render byte-identical results.
    #[test]
    fn render_is_deterministic(set in arb_attribute_set()) {
        prop_assert_eq!(render(&set), render(&set));
    }

    /// Rendering fails exactly on the two constructor conflicts.
    #[test]
    fn render_fails_only_on_conflicts(set in arb_flags_for(TypeClass::Class)) {
        let styles = style_count(&set);
        let dangling = set.attributes.has_inherited_default_constr && set.base_class_count() == 0;
        match render(&set) {
            Err(RenderError::AmbiguousConstructorStyle { styles: listed }) => {
                prop_assert!(styles > 1);
                prop_assert_eq!(listed.len(), styles);
            }
            Err(RenderError::DanglingInheritedConstructor) => {
                prop_assert_eq!(styles, 1);
                prop_assert!(dangling);
            }
            Err(e @ RenderError::InvalidConfig { .. }) => {
                prop_assert!(false, "unexpected render error: {}", e);
            }
            Ok(text) => {
                prop_assert!(styles <= 1);
                prop_assert!(!dangling);
                prop_assert!(text.starts_with("struct T"));
                prop_assert!(text.ends_with("};"), "expected text to end with `}};`, got {:?}", text);
                prop_assert!(!text.contains('|'));
            }
        }
    }

    /// The inheritance fragment names one base per base-class flag.
    #[test]
    fn inheritance_counts_bases(set in arb_attribute_set()) {
        let fragment = inheritance_fragment(&set, &RenderConfig::default());
        prop_assert_eq!(fragment.base_count, set.base_class_count());
        prop_assert_eq!(fragment.text.matches("Base").count(), fragment.base_count);
    }

    /// Rendered members follow their flags.
    #[test]
    fn members_follow_flags(set in arb_flags_for(TypeClass::Class)) {
        if let Ok(text) = render(&set) {
            prop_assert_eq!(text.contains("virtual f();"), set.attributes.has_virtual_mf);
            prop_assert_eq!(text.contains("int a = 0;"), set.attributes.has_nsdm_with_initializer);
            prop_assert_eq!(text.contains("int& b;"), set.attributes.has_initializer_needy_nsdm);
        }
    }
}
