//! Static site content: the project records, capability badges and glyphs
//! rendered by the portfolio page. Populated once, never mutated.

/// The three-part case study shown in the project modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudy {
    pub challenge: &'static str,
    pub solution: &'static str,
    pub result: &'static str,
}

/// Visual treatment of a project card.
///
/// `Img` carries its asset location, so a card can never claim to be an
/// image without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectImage {
    /// A dashboard mock drawn with widgets instead of a bitmap.
    CustomUi,
    /// A bitmap asset, resolved relative to the configured base path.
    Img { url: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub category: &'static str,
    pub title: &'static str,
    pub short_desc: &'static str,
    pub tech: &'static [&'static str],
    pub image: ProjectImage,
    pub full_description: CaseStudy,
}

pub static PROJECTS: [Project; 2] = [
    Project {
        id: 1,
        category: "SISTEMA LOGÍSTICO",
        title: "Vanguard Fleet",
        short_desc: "Monitoramento de frota em tempo real com integração de mapas e dados críticos.",
        tech: &["React", "Leaflet Maps", "WebSocket", "Tailwind", "SAP API"],
        image: ProjectImage::CustomUi,
        full_description: CaseStudy {
            challenge: "A empresa perdia visibilidade da carga após a saída do centro de distribuição. O sistema antigo não oferecia rastreamento visual intuitivo.",
            solution: "Desenvolvi um Dashboard Web que consome dados de GPS em tempo real via WebSocket. Criei uma interface visual onde o gestor vê a frota no mapa e recebe alertas de manutenção.",
            result: "Aumento de 30% na pontualidade das entregas e redução drástica de ligações para motoristas.",
        },
    },
    Project {
        id: 2,
        category: "LANDING PAGE & BRANDING",
        title: "Lumina Arch",
        short_desc: "Site institucional com foco total em estética, animação e conversão.",
        tech: &["Vite", "Framer Motion", "GSAP", "Design Responsivo"],
        image: ProjectImage::Img {
            url: "lumina-arch.jpg",
        },
        full_description: CaseStudy {
            challenge: "Um escritório de arquitetura precisava de um site que transmitisse elegância e minimalismo, diferenciando-se dos concorrentes locais.",
            solution: "Criei uma experiência imersiva com 'smooth scroll'. O uso de tipografia editorial e muito espaço em branco (whitespace) valorizou as fotos dos projetos.",
            result: "Aumento de 150% nos contatos qualificados via site no primeiro mês de lançamento.",
        },
    },
];

/// Find a project by its id.
pub fn project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Glyphs used across the page, rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Code,
    Globe,
    Smartphone,
    Mail,
    Instagram,
    Linkedin,
    ArrowRight,
    Menu,
    Close,
    MapPin,
    Truck,
    Download,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Code => "</>",
            Icon::Globe => "◍",
            Icon::Smartphone => "▯",
            Icon::Mail => "✉",
            Icon::Instagram => "◎",
            Icon::Linkedin => "in",
            Icon::ArrowRight => "→",
            Icon::Menu => "☰",
            Icon::Close => "✕",
            Icon::MapPin => "📍",
            Icon::Truck => "🚚",
            Icon::Download => "↓",
        }
    }
}

/// Capability cards in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechBadge {
    pub name: &'static str,
    pub icon: Icon,
    pub stack: &'static str,
}

pub static TECH_BADGES: [TechBadge; 2] = [
    TechBadge {
        name: "Frontend",
        icon: Icon::Code,
        stack: "React, Vite, Tailwind",
    },
    TechBadge {
        name: "Backend",
        icon: Icon::Globe,
        stack: "Integração API, SAP, SQL",
    },
];

/// Phrases cycled by the hero typewriter.
pub const TYPEWRITER_PHRASES: [&str; 3] = [
    "Desenvolvedor Frontend",
    "Consultor SAP ABAP",
    "Design de Interfaces",
];

pub const WORDMARK: &str = "RPZ.";
pub const FIRST_NAME: &str = "RAFAEL";
pub const LAST_NAME: &str = "PADILHA";
pub const AVAILABILITY: &str = "DISPONÍVEL PARA PROJETOS";
