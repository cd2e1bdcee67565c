//! The symbology variants and their static metadata.

use serde::{Deserialize, Serialize};

use crate::caps;

/// Every symbology known to some registry profile.
///
/// Raw numeric ids are deliberately *not* the enum discriminants: the
/// id-to-variant mapping is owned by [`crate::Profile`], because the same id
/// legitimately resolves to different variants in different profiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Symbology {
    Code11,
    C25Standard,
    C25Inter,
    C25Iata,
    C25Logic,
    C25Ind,
    Code39,
    ExCode39,
    EanX,
    Gs1_128,
    Codabar,
    Code128,
    DpLeitcode,
    DpIdentcode,
    Code16k,
    Code49,
    Code93,
    Flat,
    DataBarOmni,
    DataBarLimited,
    DataBarExpanded,
    Telepen,
    Upca,
    Upce,
    Postnet,
    MsiPlessey,
    Fim,
    Logmars,
    Pharma,
    Pzn,
    PharmaTwo,
    Pdf417,
    Pdf417Comp,
    MaxiCode,
    QrCode,
    /// Code 128 forced to subset B; retired spelling used by older profiles.
    Code128B,
    /// Code 128 restricted to subsets A and B; current meaning of id 60.
    Code128Ab,
    AusPost,
    AusReply,
    AusRoute,
    AusRedirect,
    Isbn,
    Rm4scc,
    DataMatrix,
    Ean14,
    CodablockF,
    Nve18,
    JapanPost,
    KoreaPost,
    DataBarStacked,
    DataBarStackedOmni,
    DataBarExpandedStacked,
    Planet,
    MicroPdf417,
    UspsImail,
    Plessey,
    TelepenNum,
    Itf14,
    Kix,
    Aztec,
    Daft,
    MicroQr,
    Hibc128,
    Hibc39,
    HibcDataMatrix,
    HibcQr,
    HibcPdf,
    HibcMicroPdf,
    HibcCodablockF,
    HibcAztec,
    AztecRune,
    Code32,
    EanXCc,
    Gs1_128Cc,
    DataBarOmniCc,
    DataBarLimitedCc,
    DataBarExpandedCc,
    UpcaCc,
    UpceCc,
    DataBarStackedCc,
    DataBarStackedOmniCc,
    DataBarExpandedStackedCc,
    Channel,
    CodeOne,
    GridMatrix,
}

impl Symbology {
    /// Canonical short name.
    pub fn name(self) -> &'static str {
        use Symbology::*;
        match self {
            Code11 => "CODE11",
            C25Standard => "C25STANDARD",
            C25Inter => "C25INTER",
            C25Iata => "C25IATA",
            C25Logic => "C25LOGIC",
            C25Ind => "C25IND",
            Code39 => "CODE39",
            ExCode39 => "EXCODE39",
            EanX => "EANX",
            Gs1_128 => "GS1_128",
            Codabar => "CODABAR",
            Code128 => "CODE128",
            DpLeitcode => "DPLEIT",
            DpIdentcode => "DPIDENT",
            Code16k => "CODE16K",
            Code49 => "CODE49",
            Code93 => "CODE93",
            Flat => "FLAT",
            DataBarOmni => "DBAR_OMN",
            DataBarLimited => "DBAR_LTD",
            DataBarExpanded => "DBAR_EXP",
            Telepen => "TELEPEN",
            Upca => "UPCA",
            Upce => "UPCE",
            Postnet => "POSTNET",
            MsiPlessey => "MSI_PLESSEY",
            Fim => "FIM",
            Logmars => "LOGMARS",
            Pharma => "PHARMA",
            Pzn => "PZN",
            PharmaTwo => "PHARMA_TWO",
            Pdf417 => "PDF417",
            Pdf417Comp => "PDF417COMP",
            MaxiCode => "MAXICODE",
            QrCode => "QRCODE",
            Code128B => "CODE128B",
            Code128Ab => "CODE128AB",
            AusPost => "AUSPOST",
            AusReply => "AUSREPLY",
            AusRoute => "AUSROUTE",
            AusRedirect => "AUSREDIRECT",
            Isbn => "ISBNX",
            Rm4scc => "RM4SCC",
            DataMatrix => "DATAMATRIX",
            Ean14 => "EAN14",
            CodablockF => "CODABLOCKF",
            Nve18 => "NVE18",
            JapanPost => "JAPANPOST",
            KoreaPost => "KOREAPOST",
            DataBarStacked => "DBAR_STK",
            DataBarStackedOmni => "DBAR_OMNSTK",
            DataBarExpandedStacked => "DBAR_EXPSTK",
            Planet => "PLANET",
            MicroPdf417 => "MICROPDF417",
            UspsImail => "USPS_IMAIL",
            Plessey => "PLESSEY",
            TelepenNum => "TELEPEN_NUM",
            Itf14 => "ITF14",
            Kix => "KIX",
            Aztec => "AZTEC",
            Daft => "DAFT",
            MicroQr => "MICROQR",
            Hibc128 => "HIBC_128",
            Hibc39 => "HIBC_39",
            HibcDataMatrix => "HIBC_DM",
            HibcQr => "HIBC_QR",
            HibcPdf => "HIBC_PDF",
            HibcMicroPdf => "HIBC_MICPDF",
            HibcCodablockF => "HIBC_BLOCKF",
            HibcAztec => "HIBC_AZTEC",
            AztecRune => "AZRUNE",
            Code32 => "CODE32",
            EanXCc => "EANX_CC",
            Gs1_128Cc => "GS1_128_CC",
            DataBarOmniCc => "DBAR_OMN_CC",
            DataBarLimitedCc => "DBAR_LTD_CC",
            DataBarExpandedCc => "DBAR_EXP_CC",
            UpcaCc => "UPCA_CC",
            UpceCc => "UPCE_CC",
            DataBarStackedCc => "DBAR_STK_CC",
            DataBarStackedOmniCc => "DBAR_OMNSTK_CC",
            DataBarExpandedStackedCc => "DBAR_EXPSTK_CC",
            Channel => "CHANNEL",
            CodeOne => "CODEONE",
            GridMatrix => "GRIDMATRIX",
        }
    }

    /// Capability word, an OR of [`caps`] bits.
    pub fn capabilities(self) -> u32 {
        use caps::*;
        use Symbology::*;
        match self {
            Code11 | C25Standard | C25Iata | C25Logic | C25Ind | ExCode39 | Codabar
            | DpLeitcode | DpIdentcode | Code93 | Telepen | MsiPlessey | Logmars | Pzn
            | Plessey | TelepenNum | KoreaPost | Code32 | Channel => HRT,
            C25Inter | Itf14 => HRT | COMPLIANT_HEIGHT | QUIET_ZONES,
            Code39 | Hibc39 => HRT | COMPLIANT_HEIGHT,
            EanX | Isbn => HRT | EXTENDABLE | COMPOSITE | QUIET_ZONES | COMPLIANT_HEIGHT,
            Upca | Upce => HRT | EXTENDABLE | COMPOSITE | QUIET_ZONES | COMPLIANT_HEIGHT,
            Gs1_128 => HRT | GS1 | COMPOSITE | COMPLIANT_HEIGHT,
            Code128 | Code128B | Code128Ab | Hibc128 => HRT | READER_INIT,
            Code16k | Code49 => READER_INIT | STACKABLE,
            Flat | Fim | Pharma | PharmaTwo | AusReply | AusRoute | AusRedirect | Daft
            | Kix => 0,
            AusPost | JapanPost => COMPLIANT_HEIGHT,
            DataBarOmni | DataBarLimited | DataBarExpanded => HRT | COMPOSITE | COMPLIANT_HEIGHT,
            Postnet | Planet | UspsImail | Rm4scc => COMPLIANT_HEIGHT,
            Pdf417 | Pdf417Comp | HibcPdf => ECI | READER_INIT | STRUCTAPP,
            MicroPdf417 | HibcMicroPdf => ECI | STRUCTAPP,
            MaxiCode => ECI | GS1 | FIXED_RATIO | STRUCTAPP,
            QrCode | HibcQr => {
                ECI | GS1 | DOTTY | FIXED_RATIO | READER_INIT | FULL_MULTIBYTE | MASK | STRUCTAPP
            }
            MicroQr => FULL_MULTIBYTE | MASK | FIXED_RATIO,
            DataMatrix | HibcDataMatrix => ECI | GS1 | DOTTY | READER_INIT | FULL_MULTIBYTE
                | STRUCTAPP,
            Ean14 | Nve18 => HRT | GS1,
            CodablockF | HibcCodablockF => STACKABLE | READER_INIT,
            DataBarStacked | DataBarStackedOmni | DataBarExpandedStacked => {
                COMPOSITE | STACKABLE | COMPLIANT_HEIGHT
            }
            Aztec | HibcAztec => ECI | GS1 | READER_INIT | FULL_MULTIBYTE | STRUCTAPP,
            AztecRune => FIXED_RATIO,
            EanXCc | UpcaCc | UpceCc => HRT | COMPOSITE | GS1 | QUIET_ZONES | COMPLIANT_HEIGHT,
            Gs1_128Cc | DataBarOmniCc | DataBarLimitedCc | DataBarExpandedCc
            | DataBarStackedCc | DataBarStackedOmniCc | DataBarExpandedStackedCc => {
                HRT | COMPOSITE | GS1 | COMPLIANT_HEIGHT
            }
            CodeOne => ECI | GS1 | FULL_MULTIBYTE | STRUCTAPP,
            GridMatrix => ECI | FULL_MULTIBYTE | MASK | FIXED_RATIO | STRUCTAPP,
        }
    }

    /// True if an encoder for this symbology is compiled into this build.
    ///
    /// The engine ships the shared framework plus the worked linear
    /// encoders; the long tail reports as unavailable and fails id
    /// validation at dispatch.
    pub fn encoder_available(self) -> bool {
        matches!(self, Symbology::MsiPlessey | Symbology::Code39)
    }

    /// Minimum compliant height in modules, for symbologies whose standard
    /// mandates one. `None` when no rule applies.
    pub fn min_compliant_height(self, symbol_width: usize) -> Option<f32> {
        if self.capabilities() & caps::COMPLIANT_HEIGHT == 0 {
            return None;
        }
        // 15 % of symbol length with a floor, the common linear rule.
        Some((0.15 * symbol_width as f32).max(5.0))
    }

    /// Modules of quiet zone mandated on each horizontal side, when the
    /// standard mandates any.
    pub fn quiet_zone_modules(self) -> usize {
        if self.capabilities() & caps::QUIET_ZONES != 0 {
            10
        } else {
            0
        }
    }
}
