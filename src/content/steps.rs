#[derive(Clone, Debug, PartialEq)]
pub struct DetailSection {
    pub title: &'static str,
    pub text: &'static str,
}

/// One step of the "working together" process.
#[derive(Clone, Debug, PartialEq)]
pub struct StepData {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub details: &'static [DetailSection],
}

impl StepData {
    /// Element id of the step's block in the detail section.
    pub fn anchor_id(&self) -> String {
        format!("step-{}", self.id)
    }

    pub fn heading(&self) -> String {
        format!("Step {}: {}", self.id, self.title)
    }
}

pub struct GlobalAvailability {
    pub title: &'static str,
    pub text: &'static str,
}

pub const WORKING_TOGETHER_STEPS: &[StepData] = &[
    StepData {
        id: 1,
        title: "MEETING & INFORMATION GATHERING",
        description: "Initial consultation to understand your vision, needs, and objectives.",
        image: "/images/mwm-step-1.png",
        details: &[
            DetailSection {
                title: "Initial Meeting",
                text: "We'll start by exploring the design or communication challenges, considering both creative solutions and the broader impact of our choices.",
            },
            DetailSection {
                title: "Defining Purpose & Goals",
                text: "Together, we'll set clear objectives, ensuring that your project aligns with your values and resonates authentically with your audience.",
            },
        ],
    },
    StepData {
        id: 2,
        title: "RESEARCH & CREATIVE PROPOSAL DEVELOPMENT",
        description: "Deep dive into concepts, references, and visual language to create a tailored proposal.",
        image: "/images/mwm-step-2.png",
        details: &[
            DetailSection {
                title: "Conceptualization",
                text: "I'll define an aesthetic direction that feels authentic to your brand, integrating thoughtful, sustainable choices where possible.",
            },
            DetailSection {
                title: "Inspiration Gathering",
                text: "We'll gather references from diverse sources, drawing inspiration from both creative and ethical approaches to design.",
            },
            DetailSection {
                title: "Moodboard Creation",
                text: "The moodboard will serve as a visual guide, capturing the essence of the concept while staying mindful of sustainability and integrity.",
            },
        ],
    },
    StepData {
        id: 3,
        title: "CREATION OF VISUAL CONCEPTS & DIRECTION",
        description: "Developing mood boards, color palettes, and visual narratives that align with your brand.",
        image: "/images/mwm-step-3.png",
        details: &[
            DetailSection {
                title: "Visual Concepts",
                text: "I'll develop a creative direction that speaks to your brand's unique story, balancing innovation with conscious design choices.",
            },
            DetailSection {
                title: "Written Pieces",
                text: "Clear and concise writing will accompany the visuals, expressing both the technical and conceptual aspects of the project.",
            },
        ],
    },
    StepData {
        id: 4,
        title: "TEAM CREATION & COMMUNICATION",
        description: "Assembling the perfect team of collaborators and establishing clear communication channels.",
        image: "/images/mwm-step-4.png",
        details: &[
            DetailSection {
                title: "Assembling the Team",
                text: "I'll gather a team of professionals who share a commitment to quality and respect for the environment, ensuring everyone is aligned with the project's values.",
            },
            DetailSection {
                title: "Budgeting & Approvals",
                text: "The budget will reflect a balance of creativity, sustainability, and practical execution, with transparency throughout.",
            },
            DetailSection {
                title: "Team Briefing",
                text: "I'll communicate the vision clearly, ensuring the team understands both the creative direction and the values that underpin it.",
            },
        ],
    },
    StepData {
        id: 5,
        title: "ART DIRECTION & LOGISTICS",
        description: "Coordinating all aspects of production from locations to styling details.",
        image: "/images/mwm-step-5.png",
        details: &[
            DetailSection {
                title: "Photoshoots / Visual Merchandising",
                text: "Every element, from props to materials, will be selected with purpose and intention, minimizing waste while creating a visually impactful result.",
            },
            DetailSection {
                title: "Aligning the Team",
                text: "We'll meet to ensure everyone is aligned with the project's goals, from concept to execution.",
            },
            DetailSection {
                title: "Prop Sourcing",
                text: "I'll focus on sourcing sustainable and ethical materials, ensuring everything used is in line with the overall vision.",
            },
            DetailSection {
                title: "Set Production",
                text: "We'll collaborate with set designers who prioritize efficiency and sustainability in their process.",
            },
            DetailSection {
                title: "Budget Management",
                text: "We'll manage the budget efficiently, ensuring every choice aligns with the project's needs and values.",
            },
        ],
    },
    StepData {
        id: 6,
        title: "FASHION STYLING & PRODUCT STYLING",
        description: "Bringing the vision to life through intentional styling that tells your story.",
        image: "/images/mwm-step-6.png",
        details: &[
            DetailSection {
                title: "Styling Proposal",
                text: "I'll curate garments that reflect your brand's aesthetic while being mindful of sustainability, using eco-friendly fabrics or upcycled materials where possible.",
            },
            DetailSection {
                title: "Sourcing",
                text: "I'll source from ethical brands or sustainable collections, ensuring every piece contributes to the larger narrative.",
            },
            DetailSection {
                title: "Model Fitting",
                text: "Prior to the shoot, I'll fit garments to ensure they not only look great but align with the overall creative vision.",
            },
            DetailSection {
                title: "Comprehensive Vision",
                text: "Whether it's fashion or product, every item will be styled to reflect its story, connecting with your brand's values and the larger creative vision.",
            },
        ],
    },
];

pub const GLOBAL_AVAILABILITY: GlobalAvailability = GlobalAvailability {
    title: "GLOBAL AVAILABILITY",
    text: "I have the flexibility to collaborate with creative professionals worldwide, ensuring that our projects can have a meaningful impact, no matter where they are. Whether traveling or working remotely, I embrace the opportunity to connect and create across borders.",
};
