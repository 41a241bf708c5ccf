//! 作品集页面的静态内容

pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub struct StackGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub stack: &'static [&'static str],
    pub featured: bool,
}

pub struct WorkItem {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "home", label: "Home" },
    NavItem { id: "about", label: "About" },
    NavItem { id: "stack", label: "Tech Stack" },
    NavItem { id: "projects", label: "Projects" },
    NavItem { id: "work", label: "Work" },
    NavItem { id: "contact", label: "Contact" },
];

pub const STACK_GROUPS: &[StackGroup] = &[
    StackGroup {
        title: "Frontend",
        items: &["JavaScript", "TypeScript", "React", "Next.js"],
    },
    StackGroup {
        title: "Backend",
        items: &["Node.js", "Firebase", "Python"],
    },
    StackGroup {
        title: "Mobile",
        items: &["Flutter"],
    },
    StackGroup {
        title: "AI / ML",
        items: &["LSTM", "TinyML", "Computer Vision"],
    },
    StackGroup {
        title: "Web3",
        items: &["Ethereum", "Hardhat", "MetaMask"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Greenpal",
        description: "Productized workflow for recurring service operations with a clean client-facing interface.",
        stack: &["Next.js", "Node.js", "PostgreSQL"],
        featured: false,
    },
    Project {
        name: "MindMatters",
        description: "Mental wellness companion focused on habit-building, progress tracking, and calm UI flows.",
        stack: &["Flutter", "Firebase"],
        featured: false,
    },
    Project {
        name: "SATS",
        description: "System tool for data collection and streamlined reporting with secure access controls.",
        stack: &["React", "Python", "FastAPI"],
        featured: false,
    },
    Project {
        name: "Appforge CLI Package",
        description: "CLI to scaffold opinionated app foundations with repeatable templates and automation.",
        stack: &["Node.js", "TypeScript"],
        featured: false,
    },
    Project {
        name: "NFT Marketplace",
        description: "Web3 marketplace experience with wallet auth, listings, and transaction flows.",
        stack: &["Ethereum", "Hardhat", "MetaMask"],
        featured: false,
    },
    Project {
        name: "Property Marketplace",
        description: "Search and listing product for property discovery, built for speed and clarity.",
        stack: &["Next.js", "Firebase"],
        featured: false,
    },
    Project {
        name: "Smart Coach",
        description: "Major product initiative that blends personalized coaching, analytics, and structured training plans.",
        stack: &["Flutter", "Python", "AI / ML"],
        featured: true,
    },
    Project {
        name: "Vijus Constructions Website",
        description: "High-clarity brand site for a construction firm with lead capture and trust signals.",
        stack: &["Next.js", "Tailwind CSS"],
        featured: false,
    },
];

pub const WORK_ITEMS: &[WorkItem] = &[
    WorkItem {
        title: "Independent Freelancing",
        detail: "Shipping web and mobile products for clients with a focus on clarity, reliability, and fast iteration.",
    },
    WorkItem {
        title: "Startup-style Builds",
        detail: "Rapid product cycles, MVP delivery, and pragmatic engineering choices under tight timelines.",
    },
    WorkItem {
        title: "System-level Projects",
        detail: "Academic and production-grade systems involving data pipelines, automation, and orchestration.",
    },
];
