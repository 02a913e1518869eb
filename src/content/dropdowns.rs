/// Keys of the expandable sections on the main categories block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DropdownKey {
    Archive,
    FashionDreaming,
    WorkMethod,
    Academia,
    Press,
    Blog,
}

impl DropdownKey {
    pub const COUNT: usize = 6;

    pub const ALL: [DropdownKey; Self::COUNT] = [
        DropdownKey::Archive,
        DropdownKey::FashionDreaming,
        DropdownKey::WorkMethod,
        DropdownKey::Academia,
        DropdownKey::Press,
        DropdownKey::Blog,
    ];

    /// DOM id, also used to derive the content panel id.
    pub fn as_str(self) -> &'static str {
        match self {
            DropdownKey::Archive => "archive",
            DropdownKey::FashionDreaming => "fashionDreaming",
            DropdownKey::WorkMethod => "workMethod",
            DropdownKey::Academia => "academia",
            DropdownKey::Press => "press",
            DropdownKey::Blog => "blog",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DropdownItem {
    pub id: DropdownKey,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const DROPDOWN_ITEMS: &[DropdownItem] = &[
    DropdownItem {
        id: DropdownKey::Archive,
        title: "archive",
        subtitle: "PRODUCER, CREATIVE DIRECTOR, STYLIST & DESIGNER",
    },
    DropdownItem {
        id: DropdownKey::FashionDreaming,
        title: "fashion dreaming",
        subtitle: "A COLLABORATIVE WORKSHOP TO EXPLORE FUTURES IN FASHION",
    },
    DropdownItem {
        id: DropdownKey::WorkMethod,
        title: "my work method",
        subtitle: "FROM IDEA TO REALITY",
    },
    DropdownItem {
        id: DropdownKey::Academia,
        title: "academia",
        subtitle: "STUDY STORE 2025 - CAPACITACION INCUBADORA 2025",
    },
    DropdownItem {
        id: DropdownKey::Press,
        title: "press",
        subtitle: "SUSTAINABLE FASHION THROUGH STORYTELLING ACROSS MEDIA",
    },
    DropdownItem {
        id: DropdownKey::Blog,
        title: "blog",
        subtitle: "MY TAKE ON THINGS I CARE ABOUT",
    },
];
