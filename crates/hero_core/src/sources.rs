//! Reference links behind the hero data, for a "Sources" view.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    pub title: &'static str,
    pub url: &'static str,
}

pub const SOURCES: &[Source] = &[
    Source {
        title: "Official Overwatch 2 site",
        url: "https://overwatch.blizzard.com/en-us/heroes",
    },
    Source {
        title: "Overwatch Wiki (Fandom)",
        url: "https://overwatch.fandom.com/wiki/Overwatch_Wiki",
    },
    Source {
        title: "Heropicker.io",
        url: "https://heropicker.io/overwatch",
    },
    Source {
        title: "Overbuff",
        url: "https://www.overbuff.com/heroes",
    },
    Source {
        title: "Esports.gg",
        url: "https://www.esports.gg/news/overwatch/",
    },
    Source {
        title: "India Today Gaming",
        url: "https://www.indiatodaygaming.com/story/overwatch-2-best-heroes-tier-list-2024-3715-2024-05-23",
    },
    Source {
        title: "CS2.gg Counter List",
        url: "https://www.cs2.gg/overwatch-2-counters",
    },
];
