mod common;

use common::*;
use movelink_model::{Clip, ClipTable, HitboxTable, ModelError, ResourceSet, RowRef};
use movelink_types::ResourceKind;
use pretty_assertions::assert_eq;

fn full_set(code: &str) -> ResourceSet {
    ResourceSet::new(code)
        .with_animations(clips(&["stance", "walk", "run"]))
        .with_hitboxes(hitboxes(&[0, 3, 10]))
        .with_cameras(clips(&["cam_a"]))
}

// ── next_free_index / append_new ─────────────────────────────────

#[test]
fn clip_tables_append_at_row_count() {
    let mut set = full_set("AAA");
    assert_eq!(set.next_free_index(ResourceKind::Animation).unwrap(), 3);
    assert_eq!(set.append_new(ResourceKind::Animation).unwrap(), 3);
    assert_eq!(set.len(ResourceKind::Animation), 4);
    assert_eq!(set.append_new(ResourceKind::Camera).unwrap(), 1);
}

#[test]
fn hitbox_ids_are_sparse() {
    let mut set = full_set("AAA");
    assert_eq!(set.next_free_index(ResourceKind::Hitbox).unwrap(), 11);
    assert_eq!(set.append_new(ResourceKind::Hitbox).unwrap(), 11);
    assert_eq!(set.append_new(ResourceKind::Hitbox).unwrap(), 12);
    assert!(set.row_at(ResourceKind::Hitbox, 11).is_ok());
}

#[test]
fn empty_hitbox_table_starts_at_zero() {
    let mut set = ResourceSet::new("AAA").with_hitboxes(HitboxTable::default());
    assert_eq!(set.append_new(ResourceKind::Hitbox).unwrap(), 0);
}

#[test]
fn hitbox_table_at_max_id_is_full() {
    let mut set = ResourceSet::new("BBB").with_hitboxes(hitboxes(&[0, u32::MAX]));
    let err = set.next_free_index(ResourceKind::Hitbox).unwrap_err();
    assert!(matches!(
        err,
        ModelError::TableFull { kind: ResourceKind::Hitbox, ref table } if table == "BBB_PLAYER.bdm"
    ));
    assert_eq!(err.to_string(), "BBB_PLAYER.bdm has no free index left");

    assert!(set.append_new(ResourceKind::Hitbox).is_err());
    assert_eq!(set.len(ResourceKind::Hitbox), 2);
}

#[test]
fn append_to_missing_table_fails() {
    let mut set = ResourceSet::new("BBB");
    let err = set.append_new(ResourceKind::Camera).unwrap_err();
    assert!(matches!(
        err,
        ModelError::MissingResource { kind: ResourceKind::Camera, ref table } if table == "BBB.cam.ean"
    ));
    assert_eq!(err.kind(), Some(ResourceKind::Camera));
}

// ── row_at ───────────────────────────────────────────────────────

#[test]
fn row_at_returns_named_clip() {
    let set = full_set("AAA");
    let row = set.row_at(ResourceKind::Animation, 1).unwrap();
    assert_eq!(row.name(), Some("walk"));
    assert_eq!(set.display_name(ResourceKind::Animation, 2), Some("run"));
}

#[test]
fn row_name_outlives_row_view() {
    let set = full_set("AAA");
    let name = {
        let row = set.row_at(ResourceKind::Camera, 0).unwrap();
        row.name()
    };
    assert_eq!(name, Some("cam_a"));
    assert_eq!(set.display_name(ResourceKind::Hitbox, 3), None);
    assert_eq!(set.display_name(ResourceKind::Animation, 40), None);
}

#[test]
fn row_at_hitbox_uses_id_not_position() {
    let set = full_set("AAA");
    assert!(matches!(
        set.row_at(ResourceKind::Hitbox, 10).unwrap(),
        RowRef::Hitbox(r) if r.id == 10
    ));
    assert!(set.row_at(ResourceKind::Hitbox, 2).is_err());
}

#[test]
fn row_at_out_of_range_names_table() {
    let set = full_set("AAA");
    let err = set.row_at(ResourceKind::Animation, 9).unwrap_err();
    assert_eq!(err.to_string(), "AAA.ean does not contain index 9");
}

// ── copy_row ─────────────────────────────────────────────────────

#[test]
fn copy_row_clip_carries_payload_and_name() {
    let src = full_set("AAA");
    let mut dst = ResourceSet::new("BBB").with_animations(ClipTable::new(vec![Clip::named("old")]));
    dst.copy_row(ResourceKind::Animation, 0, &src, 2).unwrap();
    let copied = &dst.animations.as_ref().unwrap().clips[0];
    assert_eq!(copied, &src.animations.as_ref().unwrap().clips[2]);
    assert_eq!(copied.name, "run");
}

#[test]
fn copy_row_hitbox_keeps_destination_id() {
    let src = full_set("AAA");
    let mut dst = ResourceSet::new("BBB").with_hitboxes(hitboxes(&[7]));
    dst.copy_row(ResourceKind::Hitbox, 7, &src, 10).unwrap();
    let record = dst.hitboxes.as_ref().unwrap().get(7).unwrap();
    assert_eq!(record.id, 7);
    assert_eq!(record.data, vec![10, 10]);
}

#[test]
fn copy_row_reports_source_out_of_range() {
    let src = full_set("AAA");
    let mut dst = full_set("BBB");
    let err = dst.copy_row(ResourceKind::Animation, 0, &src, 50).unwrap_err();
    assert!(matches!(
        err,
        ModelError::IndexOutOfRange { index: 50, ref table, .. } if table == "AAA.ean"
    ));
}

#[test]
fn copy_row_reports_destination_out_of_range() {
    let src = full_set("AAA");
    let mut dst = full_set("BBB");
    let err = dst.copy_row(ResourceKind::Animation, 8, &src, 0).unwrap_err();
    assert!(matches!(
        err,
        ModelError::IndexOutOfRange { index: 8, ref table, .. } if table == "BBB.ean"
    ));
}

#[test]
fn copy_row_missing_source_table() {
    let src = ResourceSet::new("AAA");
    let mut dst = full_set("BBB");
    let err = dst.copy_row(ResourceKind::Hitbox, 0, &src, 0).unwrap_err();
    assert!(matches!(
        err,
        ModelError::MissingResource { ref table, .. } if table == "AAA_PLAYER.bdm"
    ));
}

#[test]
fn clip_paste_without_keep_name() {
    let mut target = Clip::named("mine");
    let other = Clip {
        name: "theirs".into(),
        frame_count: 30,
        data: vec![1, 2, 3],
    };
    target.paste(&other, false);
    assert_eq!(target.name, "mine");
    assert_eq!(target.frame_count, 30);
    assert_eq!(target.data, vec![1, 2, 3]);
}
