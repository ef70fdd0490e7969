//! The Ankara rail network.

use std::collections::BTreeMap;

use crate::domain::{Line, Station};
use crate::network::CostModel;

use super::{LineSpec, NetworkSpec};

const LINES: &[(&str, &[&str])] = &[
    (
        "M1",
        &[
            "Kızılay",
            "Sıhhıye",
            "Ulus",
            "Atatürk Kültür Merkezi",
            "Akköprü",
            "İvedik",
            "Yenimahalle",
            "Demetevler",
            "Hastane",
            "Macunköy",
            "Ostim",
            "Batıkent",
        ],
    ),
    (
        "M2",
        &[
            "Kızılay",
            "Necatibey",
            "Milli Kütüphane",
            "Söğütözü",
            "MTA",
            "ODTÜ",
            "Bilkent",
            "Tarım Bakanlığı-Danıştay",
            "Beytepe",
            "Ümitköy",
            "Çayyolu",
            "Koru",
        ],
    ),
    (
        "M3",
        &[
            "Batıkent",
            "Batı Merkez",
            "Mesa",
            "Botanik",
            "İstanbul Yolu",
            "Eryaman 1-2",
            "Eryaman 5",
            "Devlet Mah.",
            "Harikalar Diyarı",
            "Fatih",
            "GOP",
            "OSB Törekent",
        ],
    ),
    (
        "M4",
        &[
            "Kızılay",
            "Adliye",
            "Gar",
            "AKM",
            "ASKİ",
            "Dışkapı",
            "Meteoroloji",
            "Belediye",
            "Mecidiye",
            "Kuyubaşı",
            "Dutluk",
            "Gazino",
        ],
    ),
    (
        "Ankaray",
        &[
            "Dikimevi",
            "Kurtuluş",
            "Kolej",
            "Kızılay",
            "Demirtepe",
            "Maltepe",
            "Anadolu",
            "Beşevler",
            "Bahçelievler",
            "Emek",
            "AŞTİ",
        ],
    ),
    (
        "Başkentray",
        &[
            "Sincan",
            "Lale",
            "Elvankent",
            "Eryaman YHT",
            "Özgüneş",
            "Etimesgut",
            "Hava Durağı",
            "Behiçbey",
            "Marşandiz",
            "Gazi",
            "Gazi Mahallesi",
            "Hipodrom",
            "Ankara",
            "Sıhhıye",
            "Kurtuluş",
            "Cebeci",
            "Demirlibahçe",
            "Saimekadın",
            "Mamak",
            "Bağderesi",
            "Üreğil",
            "Köstence",
            "Kayaş",
        ],
    ),
];

const TRANSFERS: &[(&str, &[&str])] = &[
    ("Kızılay", &["M1", "M2", "M4", "Ankaray"]),
    ("Sıhhıye", &["M1", "Başkentray"]),
    ("Yenimahalle", &["M1", "Yenimahalle-Şentepe Teleferik"]),
    ("Batıkent", &["M1", "M3"]),
    ("Söğütözü", &["M2", "Ankaray"]),
    ("Kurtuluş", &["Ankaray", "Başkentray"]),
    ("AŞTİ", &["Ankaray", "Başkentray"]),
];

/// The Ankara metro, Ankaray and Başkentray lines with their transfer
/// stations, priced with the default cost model.
pub fn ankara() -> NetworkSpec {
    let lines = LINES
        .iter()
        .map(|(name, stations)| LineSpec {
            name: Line::new(*name),
            stations: stations.iter().map(|s| Station::new(*s)).collect(),
        })
        .collect();

    let transfers: BTreeMap<Station, Vec<Line>> = TRANSFERS
        .iter()
        .map(|(station, lines)| {
            (
                Station::new(*station),
                lines.iter().map(|l| Line::new(*l)).collect(),
            )
        })
        .collect();

    NetworkSpec {
        costs: CostModel::default(),
        lines,
        transfers,
    }
}
