use std::fmt;
use std::str::FromStr;

/// Target languages understood by the translation service.
///
/// The declaration order is the ordinal persisted in settings
/// (`tlx.DefaultTargetLang`), so new codes must only ever be appended
/// before `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageCode {
    Ar,   // Arabic
    Bg,   // Bulgarian
    Cs,   // Czech
    Da,   // Danish
    De,   // German
    El,   // Greek
    En,   // English (unspecified variant, kept for old settings)
    EnGb, // English (British)
    EnUs, // English (American)
    Es,   // Spanish
    Et,   // Estonian
    Fi,   // Finnish
    Fr,   // French
    Hu,   // Hungarian
    Id,   // Indonesian
    It,   // Italian
    Ja,   // Japanese
    Ko,   // Korean
    Lt,   // Lithuanian
    Lv,   // Latvian
    Nb,   // Norwegian Bokmål
    Nl,   // Dutch
    Pl,   // Polish
    Pt,   // Portuguese (unspecified variant, kept for old settings)
    PtBr, // Portuguese (Brazilian)
    PtPt, // Portuguese (European)
    Ro,   // Romanian
    Ru,   // Russian
    Sk,   // Slovak
    Sl,   // Slovenian
    Sv,   // Swedish
    Tr,   // Turkish
    Uk,   // Ukrainian
    Zh,   // Chinese (simplified)
    #[default]
    Unknown,
}

use LanguageCode::*;

const ALL: [LanguageCode; 34] = [
    Ar, Bg, Cs, Da, De, El, En, EnGb, EnUs, Es, Et, Fi, Fr, Hu, Id, It, Ja, Ko, Lt, Lv, Nb, Nl,
    Pl, Pt, PtBr, PtPt, Ro, Ru, Sk, Sl, Sv, Tr, Uk, Zh,
];

impl LanguageCode {
    /// Every supported code in ordinal order, without `Unknown`.
    pub fn all() -> &'static [LanguageCode] {
        &ALL
    }

    /// Lenient parse. Never fails: anything unrecognised is `Unknown`.
    ///
    /// Exact code names and display strings win over the shorthand aliases,
    /// so `"PT"` stays the unspecified Portuguese code. The bare `pt`
    /// shorthand is deliberately not an alias for `PT-PT`: `Pt` has to
    /// parse back from its own display string.
    pub fn parse(code: &str) -> Self {
        let upper = code.trim().to_ascii_uppercase();
        if upper.is_empty() {
            return Unknown;
        }

        if let Some(exact) = ALL
            .iter()
            .copied()
            .find(|c| c.name() == upper || c.as_str() == upper)
        {
            return exact;
        }

        match upper.as_str() {
            "GB" | "EN_GB" => EnGb,
            "US" | "EN_US" => EnUs,
            "BR" | "PT_BR" => PtBr,
            "PT_PT" => PtPt,
            _ => Unknown,
        }
    }

    /// Look a code up by its persisted ordinal.
    pub fn from_index(index: i64) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|i| ALL.get(i).copied())
            .unwrap_or(Unknown)
    }

    /// Ordinal of this code, `None` for `Unknown`.
    pub fn index(self) -> Option<usize> {
        ALL.iter().position(|c| *c == self)
    }

    /// Canonical wire string, e.g. `EN-GB` or `DE`.
    pub fn as_str(self) -> &'static str {
        match self {
            EnGb => "EN-GB",
            EnUs => "EN-US",
            PtBr => "PT-BR",
            PtPt => "PT-PT",
            other => other.name(),
        }
    }

    pub fn is_known(self) -> bool {
        self != Unknown
    }

    // Bare enum name, used for case-insensitive matching.
    fn name(self) -> &'static str {
        match self {
            Ar => "AR",
            Bg => "BG",
            Cs => "CS",
            Da => "DA",
            De => "DE",
            El => "EL",
            En => "EN",
            EnGb => "ENGB",
            EnUs => "ENUS",
            Es => "ES",
            Et => "ET",
            Fi => "FI",
            Fr => "FR",
            Hu => "HU",
            Id => "ID",
            It => "IT",
            Ja => "JA",
            Ko => "KO",
            Lt => "LT",
            Lv => "LV",
            Nb => "NB",
            Nl => "NL",
            Pl => "PL",
            Pt => "PT",
            PtBr => "PTBR",
            PtPt => "PTPT",
            Ro => "RO",
            Ru => "RU",
            Sk => "SK",
            Sl => "SL",
            Sv => "SV",
            Tr => "TR",
            Uk => "UK",
            Zh => "ZH",
            Unknown => "UNK",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
