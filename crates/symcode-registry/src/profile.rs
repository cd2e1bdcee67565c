//! Versioned id-to-symbology profiles.
//!
//! Numeric ids are stable *within* one profile but not across profiles: the
//! id space has historically reassigned meanings (id 60 below). Each profile
//! is therefore an independent closed mapping and profiles are never merged;
//! callers pin one profile for the lifetime of a registry.

use serde::{Deserialize, Serialize};

use crate::Symbology;

/// A closed id-to-variant mapping for one engine-version line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// The 2.4 id space, where id 60 selects the subset-B-only Code 128
    /// variant.
    V24,
    /// The current id space, where id 60 selects the subsets-A/B Code 128
    /// variant.
    #[default]
    Current,
}

impl Profile {
    /// Resolve a raw id within this profile.
    pub fn resolve(self, id: u32) -> Option<Symbology> {
        // Profile-specific reassignments first, shared table second.
        match (self, id) {
            (Profile::V24, 60) => return Some(Symbology::Code128B),
            (Profile::Current, 60) => return Some(Symbology::Code128Ab),
            _ => {}
        }
        SHARED_IDS
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|&(_, sym)| sym)
    }

    /// Raw id of a symbology within this profile, if it is mapped.
    pub fn id_of(self, symbology: Symbology) -> Option<u32> {
        match (self, symbology) {
            (Profile::V24, Symbology::Code128B) => return Some(60),
            (Profile::Current, Symbology::Code128Ab) => return Some(60),
            (_, Symbology::Code128B | Symbology::Code128Ab) => return None,
            _ => {}
        }
        SHARED_IDS
            .iter()
            .find(|(_, candidate)| *candidate == symbology)
            .map(|&(id, _)| id)
    }

    /// All raw ids mapped by this profile, ascending.
    pub fn ids(self) -> Vec<u32> {
        let mut ids: Vec<u32> = SHARED_IDS.iter().map(|&(id, _)| id).collect();
        ids.push(60);
        ids.sort_unstable();
        ids
    }
}

/// Ids with the same meaning in every supported profile. Gaps are withdrawn
/// symbologies and stay unassigned.
static SHARED_IDS: &[(u32, Symbology)] = &[
    (1, Symbology::Code11),
    (2, Symbology::C25Standard),
    (3, Symbology::C25Inter),
    (4, Symbology::C25Iata),
    (6, Symbology::C25Logic),
    (7, Symbology::C25Ind),
    (8, Symbology::Code39),
    (9, Symbology::ExCode39),
    (13, Symbology::EanX),
    (16, Symbology::Gs1_128),
    (18, Symbology::Codabar),
    (20, Symbology::Code128),
    (21, Symbology::DpLeitcode),
    (22, Symbology::DpIdentcode),
    (23, Symbology::Code16k),
    (24, Symbology::Code49),
    (25, Symbology::Code93),
    (28, Symbology::Flat),
    (29, Symbology::DataBarOmni),
    (30, Symbology::DataBarLimited),
    (31, Symbology::DataBarExpanded),
    (32, Symbology::Telepen),
    (34, Symbology::Upca),
    (37, Symbology::Upce),
    (40, Symbology::Postnet),
    (47, Symbology::MsiPlessey),
    (49, Symbology::Fim),
    (50, Symbology::Logmars),
    (51, Symbology::Pharma),
    (52, Symbology::Pzn),
    (53, Symbology::PharmaTwo),
    (55, Symbology::Pdf417),
    (56, Symbology::Pdf417Comp),
    (57, Symbology::MaxiCode),
    (58, Symbology::QrCode),
    (63, Symbology::AusPost),
    (66, Symbology::AusReply),
    (67, Symbology::AusRoute),
    (68, Symbology::AusRedirect),
    (69, Symbology::Isbn),
    (70, Symbology::Rm4scc),
    (71, Symbology::DataMatrix),
    (72, Symbology::Ean14),
    (74, Symbology::CodablockF),
    (75, Symbology::Nve18),
    (76, Symbology::JapanPost),
    (77, Symbology::KoreaPost),
    (79, Symbology::DataBarStacked),
    (80, Symbology::DataBarStackedOmni),
    (81, Symbology::DataBarExpandedStacked),
    (82, Symbology::Planet),
    (84, Symbology::MicroPdf417),
    (85, Symbology::UspsImail),
    (86, Symbology::Plessey),
    (87, Symbology::TelepenNum),
    (89, Symbology::Itf14),
    (90, Symbology::Kix),
    (92, Symbology::Aztec),
    (93, Symbology::Daft),
    (97, Symbology::MicroQr),
    (98, Symbology::Hibc128),
    (99, Symbology::Hibc39),
    (102, Symbology::HibcDataMatrix),
    (104, Symbology::HibcQr),
    (106, Symbology::HibcPdf),
    (108, Symbology::HibcMicroPdf),
    (110, Symbology::HibcCodablockF),
    (112, Symbology::HibcAztec),
    (128, Symbology::AztecRune),
    (129, Symbology::Code32),
    (130, Symbology::EanXCc),
    (131, Symbology::Gs1_128Cc),
    (132, Symbology::DataBarOmniCc),
    (133, Symbology::DataBarLimitedCc),
    (134, Symbology::DataBarExpandedCc),
    (135, Symbology::UpcaCc),
    (136, Symbology::UpceCc),
    (137, Symbology::DataBarStackedCc),
    (138, Symbology::DataBarStackedOmniCc),
    (139, Symbology::DataBarExpandedStackedCc),
    (140, Symbology::Channel),
    (141, Symbology::CodeOne),
    (142, Symbology::GridMatrix),
];
