//! Administrative geography of Homa Bay County.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubCounty {
    pub name: &'static str,
    pub wards: &'static [&'static str],
}

pub const SUB_COUNTIES: [SubCounty; 8] = [
    SubCounty {
        name: "Homa Bay Town",
        wards: &["Homa Bay Central", "Homa Bay East", "Homa Bay West", "Homa Bay Arujo"],
    },
    SubCounty {
        name: "Rangwe",
        wards: &["West Gem", "East Gem", "Kagan", "Kochia"],
    },
    SubCounty {
        name: "Rachuonyo North",
        wards: &["Karachuonyo East", "Karachuonyo West", "Kanyaluo", "Kibiri"],
    },
    SubCounty {
        name: "Ndhiwa",
        wards: &["Kwabwai", "Kanyadoto", "Kanyikela", "Kabuoch"],
    },
    SubCounty {
        name: "Suba North",
        wards: &["Mbita", "Rusinga Island", "Kasgunga", "Gembe"],
    },
    SubCounty {
        name: "Suba South",
        wards: &["Kaksingri West", "Ruma-Kaksingri", "Gwassi South", "Gwassi North"],
    },
    SubCounty {
        name: "Kabondo Kasipul",
        wards: &["Kabondo East", "Kabondo West", "Kokwanyo/Kakelo"],
    },
    SubCounty {
        name: "Karachuonyo",
        wards: &["Kanyipir", "Kendu Bay Town", "Wang'chieng", "West Karachuonyo"],
    },
];

pub fn wards_of(sub_county: &str) -> Option<&'static [&'static str]> {
    SUB_COUNTIES
        .iter()
        .find(|s| s.name == sub_county)
        .map(|s| s.wards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_wards() {
        assert_eq!(wards_of("Suba North").map(|w| w.len()), Some(4));
        assert!(wards_of("Nairobi").is_none());
    }
}
