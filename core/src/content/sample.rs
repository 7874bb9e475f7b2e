//! Built-in sample content
//!
//! Placeholder data shown until a `folio.json` provides the real thing.
//! The chart arrays are exact; tests depend on them.

use super::model::*;

pub const ABSTRACT_TEXT: &str = "This work proposes a new numerical analysis method for \
electromagnetics. Compared with existing methods the proposed approach improves \
computational efficiency by about 30%, and it remains stable on complex structures.";

pub fn profile() -> Profile {
    Profile {
        name: "Gildong Hong".to_string(),
        headline: "Computational Electromagnetics Researcher Portfolio".to_string(),
        bio: "Hello! I am Gildong Hong, a researcher in Computational Electromagnetics at the \
Department of Electrical and Computer Engineering, Seoul National University. My research \
focuses on high-frequency field analysis, antenna design and electromagnetic scattering.\n\n\
I am currently a Ph.D. candidate in the XYZ Lab, working on the development and \
optimization of electromagnetic simulation algorithms."
            .to_string(),
        photo: Some("profile_picture.jpg".to_string()),
    }
}

pub fn specialties() -> Vec<Specialty> {
    vec![
        Specialty {
            icon: "📡".to_string(),
            title: "EM Analysis".to_string(),
            description: "Field simulation with numerical methods such as FDTD, FEM and MoM"
                .to_string(),
        },
        Specialty {
            icon: "💻".to_string(),
            title: "Optimization".to_string(),
            description: "Machine learning and deep learning approaches to electromagnetic problems"
                .to_string(),
        },
        Specialty {
            icon: "🔍".to_string(),
            title: "Antenna Design".to_string(),
            description: "Efficient, compact antennas for next-generation wireless links"
                .to_string(),
        },
    ]
}

pub fn publications() -> Vec<Publication> {
    vec![
        Publication {
            title: "Novel FDTD Approach for Metamaterial Simulation".to_string(),
            venue: "IEEE Transactions on Antennas and Propagation".to_string(),
            year: 2024,
            url: "https://example.com/paper1".to_string(),
        },
        Publication {
            title: "Machine Learning Optimization for Antenna Design".to_string(),
            venue: "Journal of Computational Physics".to_string(),
            year: 2023,
            url: "https://example.com/paper2".to_string(),
        },
        Publication {
            title: "Efficient Electromagnetic Scattering Analysis in Complex Media".to_string(),
            venue: "International Conference on Electromagnetics (ICEM)".to_string(),
            year: 2022,
            url: "https://example.com/paper3".to_string(),
        },
    ]
}

pub fn metrics() -> Metrics {
    Metrics {
        paper_years: ["2020", "2021", "2022", "2023", "2024"]
            .map(String::from)
            .to_vec(),
        paper_counts: vec![1, 0, 1, 1, 1],
        citation_years: ["2021", "2022", "2023", "2024"].map(String::from).to_vec(),
        citations: vec![2, 5, 10, 15],
    }
}

pub fn awards() -> Vec<Award> {
    vec![
        Award {
            name: "Best Paper Award".to_string(),
            granting_body: "Institute of Electronics and Information Engineers".to_string(),
            year: 2023,
        },
        Award {
            name: "Young Scientist Award".to_string(),
            granting_body: "International EM Conference".to_string(),
            year: 2022,
        },
    ]
}

pub fn interests() -> Vec<ResearchInterest> {
    vec![
        ResearchInterest {
            title: "Computational EM Algorithms".to_string(),
            description: "I develop new algorithms for solving electromagnetic field problems \
efficiently, in particular improvements to FDTD (Finite-Difference Time-Domain), FEM \
(Finite Element Method) and MoM (Method of Moments)."
                .to_string(),
            image: Some("algorithm.jpg".to_string()),
        },
        ResearchInterest {
            title: "ML-Driven EM Optimization".to_string(),
            description: "I use deep learning and reinforcement learning to speed up \
electromagnetic design and simulation, shortening design time for complex structures while \
improving their performance."
                .to_string(),
            image: Some("ml_optimization.jpg".to_string()),
        },
        ResearchInterest {
            title: "Metasurface and Metamaterial Design".to_string(),
            description: "I design metasurfaces and metamaterials with electromagnetic properties \
not found in conventional materials, for a wide range of applications."
                .to_string(),
            image: Some("metamaterial.jpg".to_string()),
        },
    ]
}

pub fn keywords() -> Vec<KeywordWeight> {
    vec![
        KeywordWeight::new("Computational Electromagnetics", 100),
        KeywordWeight::new("FDTD", 85),
        KeywordWeight::new("FEM", 80),
        KeywordWeight::new("Antenna Design", 75),
        KeywordWeight::new("Machine Learning", 70),
        KeywordWeight::new("Deep Learning", 65),
        KeywordWeight::new("Metamaterials", 60),
        KeywordWeight::new("RF Engineering", 55),
        KeywordWeight::new("EM Wave Propagation", 50),
        KeywordWeight::new("Wireless Communication", 45),
        KeywordWeight::new("Numerical Methods", 40),
        KeywordWeight::new("GPU Computing", 35),
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Automated High-Performance Antenna Design".to_string(),
            period: "2023.03 - present".to_string(),
            description: "A system that automates antenna design with deep learning and genetic \
algorithms. Given design requirements it proposes an optimal antenna geometry and simulates \
its performance, cutting design time by 90% compared with manual design."
                .to_string(),
            image: Some("antenna_project.jpg".to_string()),
        },
        Project {
            title: "Metasurface Filter for 5G".to_string(),
            period: "2022.01 - 2022.12".to_string(),
            description: "A metasurface-based frequency-selective filter that blocks interference \
in 5G links. Verified with FDTD simulation and measurement, it suppresses interference by \
more than 20 dB in the target band."
                .to_string(),
            image: Some("metasurface_project.jpg".to_string()),
        },
        Project {
            title: "Fast EM Simulation Library".to_string(),
            period: "2021.06 - 2022.05".to_string(),
            description: "A CUDA-accelerated electromagnetic simulation library, up to 100x faster \
than CPU-based simulation, handling complex 3D structures efficiently. Python and MATLAB \
bindings make it usable across research environments."
                .to_string(),
            image: Some("simulation_library.jpg".to_string()),
        },
    ]
}

pub fn contact() -> Vec<ContactEntry> {
    vec![
        ContactEntry::new("Email", "example@snu.ac.kr"),
        ContactEntry::new("Lab phone", "02-1234-5678"),
        ContactEntry::new("Office", "Room 1234, Bldg. 301, College of Engineering, SNU"),
        ContactEntry::new("GitHub", "https://github.com/yourusername"),
        ContactEntry::new(
            "ResearchGate",
            "https://www.researchgate.net/profile/YourProfile",
        ),
        ContactEntry::new(
            "Google Scholar",
            "https://scholar.google.com/citations?user=YourID",
        ),
    ]
}
