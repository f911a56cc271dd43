// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub(crate) struct DemoAlumnus {
    pub name: &'static str,
    pub graduation_year: i32,
    pub major: &'static str,
    pub company: &'static str,
    pub position: &'static str,
    pub location: &'static str,
    pub skills: &'static [&'static str],
    pub bio: &'static str,
    pub is_mentor: bool,
}

pub(crate) struct DemoJob {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub employment_type: &'static str,
    pub posted_at: &'static str,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
}

pub(crate) struct DemoEvent {
    pub title: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

pub(crate) struct DemoNews {
    pub title: &'static str,
    pub summary: &'static str,
    pub published_on: &'static str,
}

pub(crate) const ALUMNI: [DemoAlumnus; 12] = [
    DemoAlumnus {
        name: "Alex Carter",
        graduation_year: 2016,
        major: "Computer Science",
        company: "Acme Corp",
        position: "Senior Frontend Engineer",
        location: "San Francisco, CA",
        skills: &["React", "TypeScript", "UI/UX"],
        bio: "Frontend engineer passionate about crafting accessible and performant web apps.",
        is_mentor: true,
    },
    DemoAlumnus {
        name: "Bianca Nguyen",
        graduation_year: 2018,
        major: "Data Science",
        company: "Insight Labs",
        position: "Data Scientist",
        location: "New York, NY",
        skills: &["Python", "Data Science", "ML"],
        bio: "Data scientist focusing on applied machine learning and analytics.",
        is_mentor: false,
    },
    DemoAlumnus {
        name: "Carlos Ramirez",
        graduation_year: 2014,
        major: "Information Systems",
        company: "CloudNest",
        position: "DevOps Engineer",
        location: "Austin, TX",
        skills: &["DevOps", "Cloud", "Security"],
        bio: "DevOps engineer enabling reliable, scalable systems on cloud platforms.",
        is_mentor: true,
    },
    DemoAlumnus {
        name: "Diana Lee",
        graduation_year: 2020,
        major: "Human-Computer Interaction",
        company: "Pixelware",
        position: "Product Designer",
        location: "Seattle, WA",
        skills: &["UI/UX", "Product"],
        bio: "Designing intuitive experiences and thoughtful interfaces.",
        is_mentor: false,
    },
    DemoAlumnus {
        name: "Ethan Patel",
        graduation_year: 2015,
        major: "Software Engineering",
        company: "FinEdge",
        position: "Backend Engineer",
        location: "Chicago, IL",
        skills: &["Node.js", "Go", "Security"],
        bio: "Backend specialist building secure and maintainable APIs.",
        is_mentor: true,
    },
    DemoAlumnus {
        name: "Farah Khan",
        graduation_year: 2019,
        major: "Computer Science",
        company: "NeuroNet",
        position: "ML Engineer",
        location: "Boston, MA",
        skills: &["Python", "ML", "Data Science"],
        bio: "ML engineer turning data into intelligent products.",
        is_mentor: false,
    },
    DemoAlumnus {
        name: "George Smith",
        graduation_year: 2013,
        major: "Cybersecurity",
        company: "ShieldOps",
        position: "Security Architect",
        location: "Remote",
        skills: &["Security", "Cloud"],
        bio: "Architecting secure systems and leading incident response.",
        is_mentor: true,
    },
    DemoAlumnus {
        name: "Hannah Williams",
        graduation_year: 2017,
        major: "Computer Science",
        company: "NextWave",
        position: "Full-stack Engineer",
        location: "Denver, CO",
        skills: &["React", "Node.js", "TypeScript"],
        bio: "Full-stack builder focused on product velocity and code quality.",
        is_mentor: false,
    },
    DemoAlumnus {
        name: "Ivan Petrov",
        graduation_year: 2012,
        major: "Software Engineering",
        company: "EdgeAI",
        position: "Staff Engineer",
        location: "Los Angeles, CA",
        skills: &["Go", "Cloud", "DevOps"],
        bio: "Staff engineer tackling complex distributed systems problems.",
        is_mentor: true,
    },
    DemoAlumnus {
        name: "Jasmine Brown",
        graduation_year: 2021,
        major: "Information Systems",
        company: "HubWorks",
        position: "Business Analyst",
        location: "Atlanta, GA",
        skills: &["Product", "Data Science"],
        bio: "Analyst bridging business goals with technological solutions.",
        is_mentor: false,
    },
    DemoAlumnus {
        name: "Kenji Sato",
        graduation_year: 2016,
        major: "Computer Science",
        company: "ByteForge",
        position: "Mobile Engineer",
        location: "San Diego, CA",
        skills: &["React", "UI/UX"],
        bio: "Mobile-first developer delivering smooth app experiences.",
        is_mentor: false,
    },
    DemoAlumnus {
        name: "Lina García",
        graduation_year: 2015,
        major: "Human-Computer Interaction",
        company: "Vista",
        position: "Design Manager",
        location: "Miami, FL",
        skills: &["UI/UX", "Product"],
        bio: "Leading cross-functional design teams to ship impactful products.",
        is_mentor: true,
    },
];

pub(crate) const JOBS: [DemoJob; 3] = [
    DemoJob {
        title: "Senior Frontend Engineer",
        company: "Acme Corp",
        location: "San Francisco, CA",
        employment_type: "Full-time",
        posted_at: "2025-09-20",
        description: "Build and ship modern web applications using React and TypeScript. Strong focus on accessibility and performance.",
        requirements: &["5+ years experience", "React", "TypeScript", "Accessibility"],
    },
    DemoJob {
        title: "Data Scientist",
        company: "Insight Labs",
        location: "New York, NY",
        employment_type: "Full-time",
        posted_at: "2025-09-24",
        description: "Leverage ML techniques to extract insights from large datasets, collaborate with product teams.",
        requirements: &["Python", "ML", "SQL", "Communication"],
    },
    DemoJob {
        title: "Security Engineer",
        company: "ShieldOps",
        location: "Remote",
        employment_type: "Contract",
        posted_at: "2025-09-28",
        description: "Harden infrastructure, perform risk assessments, and guide incident response best practices.",
        requirements: &["Cloud Security", "Threat Modeling", "DevSecOps"],
    },
];

pub(crate) const EVENTS: [DemoEvent; 3] = [
    DemoEvent {
        title: "Alumni Networking Night",
        date: "2025-10-15",
        location: "San Francisco, CA",
        description: "Connect with fellow alumni and current students across tech disciplines.",
    },
    DemoEvent {
        title: "Tech Talk: AI in Production",
        date: "2025-11-02",
        location: "New York, NY",
        description: "Panel discussion on deploying ML systems reliably at scale.",
    },
    DemoEvent {
        title: "Career Workshop: Portfolio Review",
        date: "2025-11-20",
        location: "Online",
        description: "Get feedback on your portfolio from alumni mentors.",
    },
];

pub(crate) const NEWS: [DemoNews; 3] = [
    DemoNews {
        title: "Alumnus Raises Series B",
        summary: "EdgeAI secures $30M to expand edge inference platform.",
        published_on: "2025-09-10",
    },
    DemoNews {
        title: "University Ranked Top 10",
        summary: "Computer Science program recognized for excellence in AI research.",
        published_on: "2025-09-18",
    },
    DemoNews {
        title: "Mentorship Program Launch",
        summary: "New initiative connects seniors with alumni mentors across the world.",
        published_on: "2025-09-25",
    },
];
