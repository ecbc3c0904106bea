use qs_proto::filter::{ActiveFilter, LevelFilter, NetworkFilter, SelectedFilter, Tag};
use qs_proto::metadata::{MetadataBlock, METADATA_ENCODED_LEN};
use qs_proto::ProtoError;

#[test]
fn no_tag_constructor_defaults() {
    let block = MetadataBlock::new();
    assert_eq!(block.level, LevelFilter::SelfAndChildren);
    assert_eq!(block.active, ActiveFilter::Active);
    assert_eq!(block.selected, SelectedFilter::All);
    assert_eq!(block.network, NetworkFilter::All);
    assert_eq!(block.tag, Tag::EVERYTHING);
}

#[test]
fn tag_constructor_defaults_to_zero_members() {
    let block = MetadataBlock::for_tag(Tag::EVERYTHING);
    assert_eq!(block.level, LevelFilter::SelfAndChildren);
    assert_eq!(block.active, ActiveFilter::All);
    assert_eq!(block.selected, SelectedFilter::Selected);
    assert_eq!(block.network, NetworkFilter::Local);
}

#[test]
fn constructor_families_are_not_interchangeable() {
    // Same tag, omitted filters: the two families land on different blocks.
    let no_tag = MetadataBlock::new();
    let tag_first = MetadataBlock::for_tag(Tag::EVERYTHING);
    assert_eq!(no_tag.tag, tag_first.tag);
    assert_ne!(no_tag, tag_first);
    assert_ne!(no_tag.active, tag_first.active);
    assert_ne!(no_tag.selected, tag_first.selected);
    assert_ne!(no_tag.network, tag_first.network);
}

#[test]
fn copies_are_independent() {
    let original = MetadataBlock::new();
    let mut copy = original;
    copy.level = LevelFilter::All;
    copy.tag = Tag::NOTHING;
    assert_eq!(original.level, LevelFilter::SelfAndChildren);
    assert_eq!(original.tag, Tag::EVERYTHING);
}

#[test]
fn encode_writes_fields_in_order() {
    let block = MetadataBlock::with_filters(
        LevelFilter::Siblings,
        ActiveFilter::Inactive,
        SelectedFilter::Unselected,
        NetworkFilter::Network,
    );
    let bytes = block.to_bytes();
    assert_eq!(bytes.len(), METADATA_ENCODED_LEN);
    assert_eq!(
        bytes,
        vec![0x00, 0x05, 0x00, 0x02, 0x00, 0x01, 0x00, 0x01, 0xFF, 0xFF]
    );
}

#[test]
fn roundtrip_preserves_all_fields() {
    let block = MetadataBlock::for_tag_with_filters(
        Tag::bit(3),
        LevelFilter::Descendants,
        ActiveFilter::Inactive,
        SelectedFilter::All,
        NetworkFilter::Network,
    );
    let decoded = MetadataBlock::from_bytes(&block.to_bytes()).unwrap();
    assert_eq!(decoded, block);
}

#[test]
fn short_input_is_malformed() {
    let bytes = MetadataBlock::new().to_bytes();
    let err = MetadataBlock::from_bytes(&bytes[..8]).unwrap_err();
    assert!(matches!(err, ProtoError::MalformedMetadata(_)));
}

#[test]
fn out_of_range_filter_is_malformed() {
    let mut bytes = MetadataBlock::new().to_bytes();
    // Level filter field set past the vocabulary.
    bytes[0] = 0x7F;
    let err = MetadataBlock::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, ProtoError::MalformedMetadata(_)));
}

#[test]
fn tag_field_accepts_any_value() {
    let mut bytes = MetadataBlock::new().to_bytes();
    bytes[8] = 0x12;
    bytes[9] = 0x34;
    let decoded = MetadataBlock::from_bytes(&bytes).unwrap();
    assert_eq!(decoded.tag, Tag(0x1234));
}

#[test]
fn activity_predicate_follows_filter() {
    let active_only = MetadataBlock::new();
    assert!(active_only.accepts_active(true));
    assert!(!active_only.accepts_active(false));

    let inactive_only = MetadataBlock::with_filters(
        LevelFilter::DEFAULT,
        ActiveFilter::Inactive,
        SelectedFilter::All,
        NetworkFilter::All,
    );
    assert!(!inactive_only.accepts_active(true));
    assert!(inactive_only.accepts_active(false));
}

#[test]
fn network_origin_predicate_follows_filter() {
    let local_only = MetadataBlock::for_tag(Tag::EVERYTHING);
    assert!(local_only.accepts_network_origin(false));
    assert!(!local_only.accepts_network_origin(true));

    let both = MetadataBlock::new();
    assert!(both.accepts_network_origin(false));
    assert!(both.accepts_network_origin(true));
}

#[test]
fn tag_matching_overlaps_and_sentinels() {
    let block = MetadataBlock::for_tag(Tag::bit(0) | Tag::bit(2));
    assert!(block.matches_tag(Tag::bit(2)));
    assert!(!block.matches_tag(Tag::bit(1)));
    assert!(block.matches_tag(Tag::EVERYTHING));
    assert!(!block.matches_tag(Tag::NOTHING));
    assert!(MetadataBlock::new().matches_tag(Tag::bit(7)));
}

#[test]
fn presets() {
    let zeroed = MetadataBlock::zeroed();
    assert_eq!(zeroed.tag, Tag::NOTHING);
    assert_eq!(zeroed.active, ActiveFilter::All);

    let self_all = MetadataBlock::self_default_tag_all();
    assert_eq!(self_all.level, LevelFilter::SelfOnly);
    assert_eq!(self_all.tag, Tag::EVERYTHING);
}
