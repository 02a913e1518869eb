pub const HIRE_ME_FOR: &[&str] = &[
    "Branding & Identity",
    "Visual Boards",
    "Photo and Video Production",
    "Event Planning",
    "Graphic Design",
    "Advertising and Marketing Campaigns",
];

pub const AND_NEED_TO: &[&str] = &[
    "Convey personality, style and brand values",
    "Present color schemes, styles, and textures",
    "Convey the visual style, tone and guide set design decisions",
    "Visualize decorations, themes, and overall ambiance",
    "Explore layout and visualize digital elements",
    "Present creative ideas and themes for marketing campaigns",
];
