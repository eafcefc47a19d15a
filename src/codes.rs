//! Translation tables for cloud, present weather and remarks codes

use phf::phf_map;

/// Sky cover reported for a cloud layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloudCover {
    SkyClear,
    NilCloud,
    Clear,
    NoSignificantCloud,
    Few,
    Scattered,
    Broken,
    Overcast,
    VerticalVisibility,
}

impl CloudCover {
    /// Covers that get a collective height question, in asking order
    pub const COLLECTIVE: [CloudCover; 4] = [
        CloudCover::Few,
        CloudCover::Scattered,
        CloudCover::Broken,
        CloudCover::Overcast,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SKC" => Some(CloudCover::SkyClear),
            "NCD" => Some(CloudCover::NilCloud),
            "CLR" => Some(CloudCover::Clear),
            "NSC" => Some(CloudCover::NoSignificantCloud),
            "FEW" => Some(CloudCover::Few),
            "SCT" => Some(CloudCover::Scattered),
            "BKN" => Some(CloudCover::Broken),
            "OVC" => Some(CloudCover::Overcast),
            "VV" => Some(CloudCover::VerticalVisibility),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            CloudCover::SkyClear => "SKC",
            CloudCover::NilCloud => "NCD",
            CloudCover::Clear => "CLR",
            CloudCover::NoSignificantCloud => "NSC",
            CloudCover::Few => "FEW",
            CloudCover::Scattered => "SCT",
            CloudCover::Broken => "BKN",
            CloudCover::Overcast => "OVC",
            CloudCover::VerticalVisibility => "VV",
        }
    }

    /// Short lowercase name used inside question text and keys
    pub fn name(self) -> &'static str {
        match self {
            CloudCover::SkyClear => "sky clear",
            CloudCover::NilCloud => "nil cloud",
            CloudCover::Clear => "clear",
            CloudCover::NoSignificantCloud => "no significant cloud",
            CloudCover::Few => "few",
            CloudCover::Scattered => "scattered",
            CloudCover::Broken => "broken",
            CloudCover::Overcast => "overcast",
            CloudCover::VerticalVisibility => "vertical visibility",
        }
    }

    /// Name as offered for an individual height answer ("Few", "Overcast")
    pub fn title(self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Phrase offered for the coverage question
    pub fn coverage(self) -> &'static str {
        match self {
            CloudCover::SkyClear => "Sky Clear",
            CloudCover::NilCloud => "NIL Cloud Detected",
            CloudCover::Clear => "No Clouds Below 12,000 ft",
            CloudCover::NoSignificantCloud => "No Significant Cloud",
            CloudCover::Few => "Few Clouds",
            CloudCover::Scattered => "Scattered Clouds",
            CloudCover::Broken => "Broken Clouds",
            CloudCover::Overcast => "Overcast Clouds",
            CloudCover::VerticalVisibility => "Vertical Visibility Warning",
        }
    }
}

static WEATHER_WHOLE: phf::Map<&'static str, &'static str> = phf_map! {
    "NSW" => "No Significant Weather",
};

static WEATHER_DESCRIPTORS: phf::Map<&'static str, &'static str> = phf_map! {
    "MI" => "Shallow",
    "PR" => "Partial",
    "BC" => "Patches",
    "DR" => "Low Drifting",
    "BL" => "Blowing",
    "SH" => "Showers",
    "TS" => "Thunderstorm",
    "FZ" => "Freezing",
};

static WEATHER_PHENOMENA: phf::Map<&'static str, &'static str> = phf_map! {
    "DZ" => "Drizzle",
    "RA" => "Rain",
    "SN" => "Snow",
    "SG" => "Snow Grains",
    "IC" => "Ice Crystals",
    "PL" => "Ice Pellets",
    "GR" => "Hail",
    "GS" => "Small Hail",
    "UP" => "Unknown Precipitation",
    "BR" => "Mist",
    "FG" => "Fog",
    "FU" => "Smoke",
    "VA" => "Volcanic Ash",
    "DU" => "Widespread Dust",
    "SA" => "Sand",
    "HZ" => "Haze",
    "PY" => "Spray",
    "PO" => "Dust Whirls",
    "SQ" => "Squalls",
    "FC" => "Funnel Cloud",
    "SS" => "Sandstorm",
    "DS" => "Duststorm",
};

static REMARKS: phf::Map<&'static str, &'static str> = phf_map! {
    "AO1" => "Automated with no precipitation sensor",
    "AO2" => "Automated with precipitation sensor",
    "$" => "ASOS requires maintenance",
    "PNO" => "Precipitation identifier information not available",
    "FZRANO" => "Freezing rain information not available",
    "TSNO" => "Thunderstorm information not available",
    "PWINO" => "Precipitation identifier sensor not available",
    "RVRNO" => "Runway visual range not available",
    "VISNO" => "Visibility at secondary location not available",
    "CHINO" => "Cloud height at secondary location not available",
    "SLPNO" => "Sea level pressure not available",
    "PRESRR" => "Pressure rising rapidly",
    "PRESFR" => "Pressure falling rapidly",
    "NOSPECI" => "No SPECI reports taken",
    "ACFT MSHP" => "Aircraft mishap",
};

/// Translate a present weather group such as `-SHRA` or `VCTS`
///
/// Anything that does not decode completely is returned unchanged, so values
/// the parser already turned into prose survive as-is.
pub fn translate_weather(code: &str) -> String {
    if let Some(phrase) = WEATHER_WHOLE.get(code) {
        return phrase.to_string();
    }
    decode_weather(code).unwrap_or_else(|| code.to_string())
}

fn decode_weather(code: &str) -> Option<String> {
    let (intensity, rest) = if let Some(rest) = code.strip_prefix('-') {
        (Some("Light"), rest)
    } else if let Some(rest) = code.strip_prefix('+') {
        (Some("Heavy"), rest)
    } else {
        (None, code)
    };
    let (vicinity, rest) = match rest.strip_prefix("VC") {
        Some(rest) => (true, rest),
        None => (false, rest),
    };
    let (recent, rest) = match rest.strip_prefix("RE") {
        Some(rest) => (true, rest),
        None => (false, rest),
    };

    if rest.is_empty() || rest.len() % 2 != 0 || !rest.is_ascii() {
        return None;
    }

    let mut descriptor = None;
    let mut showers = false;
    let mut phenomena = Vec::new();
    for i in (0..rest.len()).step_by(2) {
        let group = &rest[i..i + 2];
        if i == 0 && WEATHER_DESCRIPTORS.contains_key(group) {
            if group == "SH" {
                showers = true;
            } else {
                descriptor = WEATHER_DESCRIPTORS.get(group).copied();
            }
        } else {
            phenomena.push(*WEATHER_PHENOMENA.get(group)?);
        }
    }

    let mut words: Vec<String> = Vec::new();
    if recent {
        words.push("Recent".to_string());
    }
    if let Some(intensity) = intensity {
        words.push(intensity.to_string());
    }
    if let Some(descriptor) = descriptor {
        words.push(descriptor.to_string());
    }
    if !phenomena.is_empty() {
        words.push(phenomena.join(" and "));
    }
    if showers {
        words.push("Showers".to_string());
    }
    if vicinity {
        words.push("in the Vicinity".to_string());
    }
    // A lone intensity/proximity marker carries no weather
    if descriptor.is_none() && phenomena.is_empty() && !showers {
        return None;
    }
    Some(words.join(" "))
}

/// Translate a remark code such as `AO2`; unknown remarks pass through
pub fn translate_remark(code: &str) -> String {
    REMARKS
        .get(code)
        .map(|phrase| phrase.to_string())
        .unwrap_or_else(|| code.to_string())
}
