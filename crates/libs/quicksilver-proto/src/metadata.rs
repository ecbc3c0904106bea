use crate::filter::{ActiveFilter, LevelFilter, NetworkFilter, SelectedFilter, Tag};
use crate::wire::{WireReader, WireWriter};
use crate::ProtoError;

pub const METADATA_FIELDS: usize = 5;
pub const METADATA_ENCODED_LEN: usize = METADATA_FIELDS * 2;

/// Routing descriptor attached to every message: which nodes in the
/// hierarchy, relative to the addressed node, a message reaches.
///
/// Built once per message at send time and not mutated afterwards. Two
/// constructor families exist and their omitted-filter defaults differ:
/// [`MetadataBlock::new`] defaults to `{Active, All, All}` with
/// `Tag::EVERYTHING`, while [`MetadataBlock::for_tag`] defaults the filters
/// to each vocabulary's zero member `{All, Selected, Local}`. The two are
/// not interchangeable when filters are omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataBlock {
    pub level: LevelFilter,
    pub active: ActiveFilter,
    pub selected: SelectedFilter,
    pub network: NetworkFilter,
    pub tag: Tag,
}

impl MetadataBlock {
    pub fn new() -> Self {
        Self::with_filters(
            LevelFilter::DEFAULT,
            ActiveFilter::Active,
            SelectedFilter::All,
            NetworkFilter::All,
        )
    }

    /// Explicit filters, tag matching everything.
    pub fn with_filters(
        level: LevelFilter,
        active: ActiveFilter,
        selected: SelectedFilter,
        network: NetworkFilter,
    ) -> Self {
        Self { level, active, selected, network, tag: Tag::EVERYTHING }
    }

    /// Tag-first construction; omitted filters take each vocabulary's zero
    /// member, not the [`MetadataBlock::new`] defaults.
    pub fn for_tag(tag: Tag) -> Self {
        Self::for_tag_with_filters(
            tag,
            LevelFilter::DEFAULT,
            ActiveFilter::All,
            SelectedFilter::Selected,
            NetworkFilter::Local,
        )
    }

    pub fn for_tag_with_filters(
        tag: Tag,
        level: LevelFilter,
        active: ActiveFilter,
        selected: SelectedFilter,
        network: NetworkFilter,
    ) -> Self {
        Self { level, active, selected, network, tag }
    }

    /// Zero member on every axis, tag matching nothing.
    pub fn zeroed() -> Self {
        Self::for_tag_with_filters(
            Tag::NOTHING,
            LevelFilter::DEFAULT,
            ActiveFilter::All,
            SelectedFilter::Selected,
            NetworkFilter::Local,
        )
    }

    /// Self-only delivery, tag matching everything.
    pub fn self_default_tag_all() -> Self {
        Self::for_tag_with_filters(
            Tag::EVERYTHING,
            LevelFilter::SelfOnly,
            ActiveFilter::All,
            SelectedFilter::Selected,
            NetworkFilter::Local,
        )
    }

    /// Field order is fixed: level, active, selected, network, tag.
    pub fn encode_onto(&self, writer: &mut WireWriter) {
        writer.put_i16(self.level.as_i16());
        writer.put_i16(self.active.as_i16());
        writer.put_i16(self.selected.as_i16());
        writer.put_i16(self.network.as_i16());
        writer.put_i16(self.tag.as_i16());
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = WireWriter::with_capacity(METADATA_ENCODED_LEN);
        self.encode_onto(&mut writer);
        writer.into_bytes()
    }

    /// Reads the five fields at the reader's position. Truncation surfaces
    /// as `TruncatedMessage`; an out-of-range filter as `MalformedMetadata`.
    /// The tag field accepts any i16.
    pub fn decode_from(reader: &mut WireReader<'_>) -> Result<Self, ProtoError> {
        let raw = reader.read_i16()?;
        let level = LevelFilter::try_from(raw)
            .map_err(|_| ProtoError::MalformedMetadata(format!("level filter {raw} out of range")))?;
        let raw = reader.read_i16()?;
        let active = ActiveFilter::try_from(raw)
            .map_err(|_| ProtoError::MalformedMetadata(format!("active filter {raw} out of range")))?;
        let raw = reader.read_i16()?;
        let selected = SelectedFilter::try_from(raw).map_err(|_| {
            ProtoError::MalformedMetadata(format!("selected filter {raw} out of range"))
        })?;
        let raw = reader.read_i16()?;
        let network = NetworkFilter::try_from(raw).map_err(|_| {
            ProtoError::MalformedMetadata(format!("network filter {raw} out of range"))
        })?;
        let tag = Tag::from(reader.read_i16()?);
        Ok(Self { level, active, selected, network, tag })
    }

    /// Standalone decode of exactly one block. Short input is a field-count
    /// violation here, not a truncation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtoError> {
        if bytes.len() < METADATA_ENCODED_LEN {
            return Err(ProtoError::MalformedMetadata(format!(
                "expected {METADATA_FIELDS} fields, found {}",
                bytes.len() / 2
            )));
        }
        let mut reader = WireReader::new(bytes);
        Self::decode_from(&mut reader)
    }

    pub fn accepts_active(&self, node_active: bool) -> bool {
        match self.active {
            ActiveFilter::All => true,
            ActiveFilter::Active => node_active,
            ActiveFilter::Inactive => !node_active,
        }
    }

    pub fn accepts_selected(&self, node_selected: bool) -> bool {
        match self.selected {
            SelectedFilter::All => true,
            SelectedFilter::Selected => node_selected,
            SelectedFilter::Unselected => !node_selected,
        }
    }

    /// `from_network` is true for a message that arrived over the transport.
    pub fn accepts_network_origin(&self, from_network: bool) -> bool {
        match self.network {
            NetworkFilter::All => true,
            NetworkFilter::Network => from_network,
            NetworkFilter::Local => !from_network,
        }
    }

    pub fn matches_tag(&self, tag: Tag) -> bool {
        self.tag.matches(tag)
    }
}

impl Default for MetadataBlock {
    fn default() -> Self {
        Self::new()
    }
}
