// src/iso_exo.rs

use crate::models::StructureRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoExoCount {
    pub num_isoforms: usize,
    pub num_exons_canonical: Option<usize>,
    pub canonical_id: Option<String>,
}

/// Derive (isoform count, canonical-transcript exon count, canonical
/// transcript id) from a structural record.
///
/// The canonical transcript is the first transcript, in list order,
/// whose id equals the record's `canonical_transcript` field with its
/// ".version" suffix stripped, or whose `is_canonical` flag is 1.
/// When neither criterion matches any transcript, both canonical
/// fields are `None`; the isoform count is reported regardless.
pub fn count_iso_exo(record: &StructureRecord) -> IsoExoCount {
    let transcripts = &record.transcripts;

    let canonical_stripped = record
        .canonical_transcript
        .as_deref()
        .unwrap_or("")
        .split('.')
        .next()
        .unwrap_or("");

    let canonical = transcripts
        .iter()
        .find(|tr| tr.id == canonical_stripped || tr.is_canonical == Some(1));

    IsoExoCount {
        num_isoforms: transcripts.len(),
        num_exons_canonical: canonical.map(|tr| tr.exons.len()),
        canonical_id: canonical.map(|tr| tr.id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExonDetail, TranscriptDetail};

    fn transcript(id: &str, is_canonical: Option<u8>, num_exons: usize) -> TranscriptDetail {
        TranscriptDetail {
            id: id.to_string(),
            is_canonical,
            exons: (0..num_exons)
                .map(|i| ExonDetail {
                    id: format!("ENSE{:011}", i),
                })
                .collect(),
        }
    }

    #[test]
    fn canonical_matched_by_stripped_version_suffix() {
        let record = StructureRecord {
            transcripts: vec![
                transcript("ENST00000414620", None, 3),
                transcript("ENST00000331789", None, 6),
            ],
            canonical_transcript: Some("ENST00000331789.11".to_string()),
        };
        let counts = count_iso_exo(&record);
        assert_eq!(counts.num_isoforms, 2);
        assert_eq!(counts.num_exons_canonical, Some(6));
        assert_eq!(counts.canonical_id.as_deref(), Some("ENST00000331789"));
    }

    #[test]
    fn canonical_matched_by_flag_when_field_absent() {
        let record = StructureRecord {
            transcripts: vec![
                transcript("ENST00000414620", Some(0), 3),
                transcript("ENST00000331789", Some(1), 5),
            ],
            canonical_transcript: None,
        };
        let counts = count_iso_exo(&record);
        assert_eq!(counts.num_exons_canonical, Some(5));
        assert_eq!(counts.canonical_id.as_deref(), Some("ENST00000331789"));
    }

    #[test]
    fn first_match_wins_when_criteria_disagree() {
        // The id match sits before the flagged transcript; list order decides.
        let record = StructureRecord {
            transcripts: vec![
                transcript("ENST00000000001", None, 2),
                transcript("ENST00000000002", Some(1), 9),
            ],
            canonical_transcript: Some("ENST00000000001.4".to_string()),
        };
        let counts = count_iso_exo(&record);
        assert_eq!(counts.canonical_id.as_deref(), Some("ENST00000000001"));
        assert_eq!(counts.num_exons_canonical, Some(2));
    }

    #[test]
    fn no_canonical_returns_count_with_absent_fields() {
        let record = StructureRecord {
            transcripts: vec![
                transcript("ENST00000414620", None, 3),
                transcript("ENST00000331789", Some(0), 6),
            ],
            canonical_transcript: None,
        };
        let counts = count_iso_exo(&record);
        assert_eq!(counts.num_isoforms, 2);
        assert_eq!(counts.num_exons_canonical, None);
        assert_eq!(counts.canonical_id, None);
    }

    #[test]
    fn empty_transcript_list() {
        let record = StructureRecord {
            transcripts: vec![],
            canonical_transcript: Some("ENST00000331789.11".to_string()),
        };
        let counts = count_iso_exo(&record);
        assert_eq!(
            counts,
            IsoExoCount {
                num_isoforms: 0,
                num_exons_canonical: None,
                canonical_id: None,
            }
        );
    }

    #[test]
    fn canonical_with_no_exons_counts_zero() {
        let record = StructureRecord {
            transcripts: vec![transcript("ENST00000331789", Some(1), 0)],
            canonical_transcript: None,
        };
        let counts = count_iso_exo(&record);
        assert_eq!(counts.num_exons_canonical, Some(0));
    }
}
