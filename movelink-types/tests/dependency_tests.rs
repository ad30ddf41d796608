use movelink_types::{Qualifier, ResourceKind, descriptor, pair_descriptor, resolve_qualifier};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn every_kind_has_a_character_qualifier() {
    for kind in ResourceKind::ALL {
        let desc = descriptor(kind);
        assert_eq!(desc.kind, kind);
        assert!(!desc.pairs.is_empty());
        assert!(desc.primary().code_for(Qualifier::Character).is_some());
    }
}

#[test]
fn animation_codes_resolve() {
    let pair = descriptor(ResourceKind::Animation).primary().pair;
    assert_eq!(pair.value_field, "ean_index");
    assert_eq!(pair.kind_field, "ean_type");
    assert_eq!(resolve_qualifier(ResourceKind::Animation, pair, 5), Qualifier::Character);
    assert_eq!(resolve_qualifier(ResourceKind::Animation, pair, 10), Qualifier::Enemy);
    assert_eq!(resolve_qualifier(ResourceKind::Animation, pair, 0), Qualifier::Common);
}

#[test]
fn unknown_code_is_unmapped() {
    let pair = descriptor(ResourceKind::Hitbox).primary().pair;
    assert_eq!(resolve_qualifier(ResourceKind::Hitbox, pair, 99), Qualifier::Unmapped);
}

#[test]
fn foreign_pair_is_unmapped() {
    let camera_pair = descriptor(ResourceKind::Camera).primary().pair;
    assert!(pair_descriptor(ResourceKind::Hitbox, camera_pair).is_none());
    assert_eq!(
        resolve_qualifier(ResourceKind::Hitbox, camera_pair, 3),
        Qualifier::Unmapped
    );
}

#[test]
fn code_for_is_inverse_of_qualifier() {
    for kind in ResourceKind::ALL {
        for pd in descriptor(kind).pairs {
            for (code, q) in pd.qualifiers {
                assert_eq!(pd.code_for(*q), Some(*code));
                assert_eq!(pd.qualifier(*code), *q);
            }
        }
    }
}

#[test]
fn only_character_is_remappable() {
    assert!(Qualifier::Character.is_remappable());
    assert!(!Qualifier::Common.is_remappable());
    assert!(!Qualifier::Skill.is_remappable());
    assert!(!Qualifier::Enemy.is_remappable());
    assert!(!Qualifier::Unmapped.is_remappable());
}

proptest! {
    #[test]
    fn resolution_is_total(code in any::<u32>()) {
        for kind in ResourceKind::ALL {
            let pair = descriptor(kind).primary().pair;
            // Never panics, and unknown codes never become remappable.
            let q = resolve_qualifier(kind, pair, code);
            if descriptor(kind).primary().code_for(Qualifier::Character) != Some(code) {
                prop_assert!(!q.is_remappable());
            }
        }
    }
}
