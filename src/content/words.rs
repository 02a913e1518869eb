// Word lists cycled by the typewriters in the "I am" section.

pub const I_AM_WORDS: &[&str] = &[
    "creative director",
    "stylist",
    "producer",
    "designer",
    "visual storyteller",
    "workshop facilitator",
];

pub const INTERESTS_WORDS: &[&str] = &[
    "sustainable fashion",
    "regenerative design",
    "collective creation",
    "ancestral crafts",
    "climate justice",
    "storytelling",
];
