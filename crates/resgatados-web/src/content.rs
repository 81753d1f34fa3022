//! Static Site Content
//!
//! The catalog rendered by the presentational pages. Content updates are code
//! changes; there is no CMS behind the site.

use resgatados_core::{Partner, PartnerKind, Project, ProjectCategory, TeamMember, Testimonial};

pub static PROJECTS: [Project; 6] = [
    Project {
        id: "1",
        title: "Resgate na Praça Central",
        description: "Acolhimento e encaminhamento de 15 pessoas em situação de rua",
        category: ProjectCategory::Rescue,
        image: "https://images.unsplash.com/photo-1469571486292-0ba58a3f068b?w=800&q=80",
        full_description: "Uma ação coordenada que resultou no resgate e encaminhamento de 15 pessoas em situação de rua para centros terapêuticos parceiros. A operação contou com apoio de voluntários, profissionais de saúde e assistentes sociais, oferecendo não apenas abrigo, mas um caminho completo de restauração.",
        date: "15/01/2024",
    },
    Project {
        id: "2",
        title: "Culto de Gratidão",
        description: "Celebração com ex-assistidos que superaram vícios",
        category: ProjectCategory::Worship,
        image: "https://images.unsplash.com/photo-1507692049790-de58290a4334?w=800&q=80",
        full_description: "Momento emocionante de louvor e testemunho onde ex-assistidos compartilharam suas histórias de superação. O culto reuniu mais de 100 pessoas e celebrou a transformação de vidas através da fé e do amor.",
        date: "10/02/2024",
    },
    Project {
        id: "3",
        title: "Parceria com Igreja Local",
        description: "Nova parceria para ampliar atendimentos",
        category: ProjectCategory::Partnership,
        image: "https://images.unsplash.com/photo-1511632765486-a01980e01a18?w=800&q=80",
        full_description: "Estabelecimento de parceria estratégica com igreja local, ampliando nossa capacidade de atendimento e fortalecendo a rede de apoio. A parceria inclui doações mensais, voluntários e espaço para atividades.",
        date: "05/03/2024",
    },
    Project {
        id: "4",
        title: "Campanha de Inverno",
        description: "Distribuição de cobertores e roupas quentes",
        category: ProjectCategory::Community,
        image: "https://images.unsplash.com/photo-1488521787991-ed7bbaae773c?w=800&q=80",
        full_description: "Campanha solidária que distribuiu mais de 200 cobertores, agasalhos e kits de higiene para pessoas em situação de rua durante o inverno. A ação contou com doações da comunidade e voluntários dedicados.",
        date: "20/06/2024",
    },
    Project {
        id: "5",
        title: "Workshop de Capacitação",
        description: "Curso profissionalizante para ressocialização",
        category: ProjectCategory::Community,
        image: "https://images.unsplash.com/photo-1552664730-d307ca884978?w=800&q=80",
        full_description: "Workshop gratuito de capacitação profissional oferecido a pessoas em processo de ressocialização, focando em habilidades práticas e preparação para o mercado de trabalho.",
        date: "15/04/2024",
    },
    Project {
        id: "6",
        title: "Resgate Emergencial Noturno",
        description: "Operação de resgate durante madrugada fria",
        category: ProjectCategory::Rescue,
        image: "https://images.unsplash.com/photo-1559027615-cd4628902d4a?w=800&q=80",
        full_description: "Operação emergencial realizada durante uma madrugada especialmente fria, resultando no resgate de 8 pessoas e encaminhamento imediato para abrigos e centros de acolhimento.",
        date: "28/07/2024",
    },
];

pub static PARTNERS: [Partner; 6] = [
    Partner {
        id: "1",
        name: "Igreja Comunidade Cristã",
        logo: "https://images.unsplash.com/photo-1438232992991-995b7058bbb3?w=400&q=80",
        description: "Parceiro desde 2020, oferecendo suporte espiritual e financeiro",
        kind: PartnerKind::Church,
    },
    Partner {
        id: "2",
        name: "CT Vida Nova",
        logo: "https://images.unsplash.com/photo-1582213782179-e0d53f98f2ca?w=400&q=80",
        description: "Centro terapêutico parceiro que recebe nossos assistidos",
        kind: PartnerKind::TherapeuticCenter,
    },
    Partner {
        id: "3",
        name: "Empresa Solidária LTDA",
        logo: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=400&q=80",
        description: "Apoio através de doações mensais e programas de empregabilidade",
        kind: PartnerKind::Company,
    },
    Partner {
        id: "4",
        name: "Assembleia de Deus Local",
        logo: "https://images.unsplash.com/photo-1464207687429-7505649dae38?w=400&q=80",
        description: "Apoio em campanhas e eventos de evangelização",
        kind: PartnerKind::Church,
    },
    Partner {
        id: "5",
        name: "CT Restauração",
        logo: "https://images.unsplash.com/photo-1519389950473-47ba0277781c?w=400&q=80",
        description: "Centro terapêutico especializado em dependência química",
        kind: PartnerKind::TherapeuticCenter,
    },
    Partner {
        id: "6",
        name: "Indústria do Bem",
        logo: "https://images.unsplash.com/photo-1497366216548-37526070297c?w=400&q=80",
        description: "Doações de materiais e suporte logístico",
        kind: PartnerKind::Company,
    },
];

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        id: "1",
        name: "João Silva",
        text: "Minha vida foi completamente transformada. Hoje sou livre e tenho propósito.",
        image: Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200&q=80"),
    },
    Testimonial {
        id: "2",
        name: "Maria Santos",
        text: "Encontrei amor e esperança quando mais precisava. Gratidão eterna!",
        image: Some("https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=200&q=80"),
    },
    Testimonial {
        id: "3",
        name: "Pedro Costa",
        text: "O resgate me deu uma segunda chance. Hoje ajudo outros a encontrarem o caminho.",
        image: Some("https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=200&q=80"),
    },
];

pub static TEAM: [TeamMember; 4] = [
    TeamMember {
        id: "1",
        name: "Pastor João Santos",
        role: "Diretor Presidente",
        image: "https://images.unsplash.com/photo-1560250097-0b93528c311a?w=400&q=80",
    },
    TeamMember {
        id: "2",
        name: "Maria Oliveira",
        role: "Coordenadora de Resgate",
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=400&q=80",
    },
    TeamMember {
        id: "3",
        name: "Carlos Silva",
        role: "Assistente Social",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&q=80",
    },
    TeamMember {
        id: "4",
        name: "Ana Costa",
        role: "Psicóloga Voluntária",
        image: "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=400&q=80",
    },
];
