// ABOUTME: Seed definitions of the four periodization programs offered at onboarding
// ABOUTME: Linear, undulating (DUP), block, and conjugate programs with their phase data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use periodization_core::constants::program_ids;
use periodization_core::models::{
    ExperienceLevel, IntensityRange, PeriodizationModel, Phase, ProgramDraft, VolumeLoad,
};

struct PhaseSeed {
    id: &'static str,
    name: &'static str,
    weeks: u32,
    focus: &'static str,
    volume_load: VolumeLoad,
    intensity: (f64, f64),
    rep_ranges: &'static [u32],
    characteristics: &'static [&'static str],
}

impl PhaseSeed {
    fn to_phase(&self) -> Phase {
        Phase {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            duration_weeks: self.weeks,
            focus: self.focus.to_owned(),
            volume_load: self.volume_load,
            intensity_range: IntensityRange {
                min: self.intensity.0,
                max: self.intensity.1,
            },
            rep_ranges: self.rep_ranges.to_vec(),
            characteristics: self
                .characteristics
                .iter()
                .map(|c| (*c).to_owned())
                .collect(),
        }
    }
}

const LINEAR_PHASES: [PhaseSeed; 4] = [
    PhaseSeed {
        id: "linear-hypertrophy",
        name: "Base de Hipertrofia",
        weeks: 4,
        focus: "Volume alto para adaptações estruturais",
        volume_load: VolumeLoad::High,
        intensity: (65.0, 75.0),
        rep_ranges: &[8, 10, 12, 15],
        characteristics: &[
            "Foco em volume total",
            "Desenvolvimento de resistência muscular",
            "Adaptações metabólicas",
            "Técnica de movimento",
        ],
    },
    PhaseSeed {
        id: "linear-strength-endurance",
        name: "Força-Resistência",
        weeks: 4,
        focus: "Transição para cargas mais altas",
        volume_load: VolumeLoad::Moderate,
        intensity: (75.0, 85.0),
        rep_ranges: &[6, 8, 10],
        characteristics: &[
            "Redução gradual do volume",
            "Aumento da intensidade",
            "Melhora da coordenação neuromuscular",
            "Preparação para cargas máximas",
        ],
    },
    PhaseSeed {
        id: "linear-strength",
        name: "Força Máxima",
        weeks: 3,
        focus: "Máximo desenvolvimento de força",
        volume_load: VolumeLoad::Low,
        intensity: (85.0, 95.0),
        rep_ranges: &[3, 4, 5, 6],
        characteristics: &[
            "Volume baixo, intensidade alta",
            "Desenvolvimento da força máxima",
            "Adaptações neurais",
            "Técnica refinada",
        ],
    },
    PhaseSeed {
        id: "linear-deload",
        name: "Recuperação Ativa",
        weeks: 1,
        focus: "Recuperação e adaptação",
        volume_load: VolumeLoad::Low,
        intensity: (50.0, 70.0),
        rep_ranges: &[8, 10, 12],
        characteristics: &[
            "Redução significativa do volume",
            "Intensidade moderada",
            "Recuperação ativa",
            "Preparação para novo ciclo",
        ],
    },
];

// Recurring weekly pattern: every phase spans the whole 8-week cycle
const UNDULATING_PHASES: [PhaseSeed; 3] = [
    PhaseSeed {
        id: "dup-hypertrophy",
        name: "Dia de Hipertrofia",
        weeks: 8,
        focus: "Volume alto, intensidade moderada",
        volume_load: VolumeLoad::High,
        intensity: (65.0, 75.0),
        rep_ranges: &[8, 10, 12],
        characteristics: &[
            "Foco em volume total",
            "Tempo sob tensão elevado",
            "Metabolismo anaeróbico",
            "Bomba muscular",
        ],
    },
    PhaseSeed {
        id: "dup-strength",
        name: "Dia de Força",
        weeks: 8,
        focus: "Volume baixo, intensidade alta",
        volume_load: VolumeLoad::Low,
        intensity: (80.0, 90.0),
        rep_ranges: &[3, 4, 5],
        characteristics: &[
            "Força máxima",
            "Adaptações neurais",
            "Coordenação intramuscular",
            "Potência",
        ],
    },
    PhaseSeed {
        id: "dup-power-endurance",
        name: "Dia de Resistência",
        weeks: 8,
        focus: "Volume moderado, intensidade baixa",
        volume_load: VolumeLoad::Moderate,
        intensity: (60.0, 70.0),
        rep_ranges: &[12, 15, 20],
        characteristics: &[
            "Resistência muscular",
            "Capacidade aeróbica local",
            "Recuperação ativa",
            "Densidade de capilares",
        ],
    },
];

const BLOCK_PHASES: [PhaseSeed; 4] = [
    PhaseSeed {
        id: "block-accumulation",
        name: "Bloco de Acumulação",
        weeks: 5,
        focus: "Volume máximo, capacidade de trabalho",
        volume_load: VolumeLoad::High,
        intensity: (60.0, 75.0),
        rep_ranges: &[8, 10, 12, 15],
        characteristics: &[
            "Volume extremo",
            "Capacidade de trabalho",
            "Adaptações metabólicas",
            "Hipertrofia máxima",
            "Densidade mitocondrial",
        ],
    },
    PhaseSeed {
        id: "block-transmutation",
        name: "Bloco de Transmutação",
        weeks: 4,
        focus: "Conversão em força, intensidade crescente",
        volume_load: VolumeLoad::Moderate,
        intensity: (75.0, 85.0),
        rep_ranges: &[5, 6, 8],
        characteristics: &[
            "Transformação das adaptações",
            "Força-velocidade",
            "Coordenação intermuscular",
            "Eficiência neural",
        ],
    },
    PhaseSeed {
        id: "block-realization",
        name: "Bloco de Realização",
        weeks: 2,
        focus: "Expressão máxima da força",
        volume_load: VolumeLoad::Low,
        intensity: (85.0, 100.0),
        rep_ranges: &[1, 2, 3, 4],
        characteristics: &[
            "Força máxima",
            "Picos de performance",
            "Coordenação refinada",
            "Confiança técnica",
        ],
    },
    PhaseSeed {
        id: "block-deload",
        name: "Recuperação",
        weeks: 1,
        focus: "Supercompensação e recovery",
        volume_load: VolumeLoad::Low,
        intensity: (50.0, 70.0),
        rep_ranges: &[8, 10],
        characteristics: &[
            "Recuperação completa",
            "Movimento de qualidade",
            "Preparação mental",
            "Análise de resultados",
        ],
    },
];

// Continuous 16-week cycle
const CONJUGATE_PHASES: [PhaseSeed; 3] = [
    PhaseSeed {
        id: "conjugate-max-effort",
        name: "Esforço Máximo",
        weeks: 16,
        focus: "Força máxima, 1-3RM",
        volume_load: VolumeLoad::Low,
        intensity: (90.0, 105.0),
        rep_ranges: &[1, 2, 3],
        characteristics: &[
            "Força máxima absoluta",
            "Coordenação intramuscular",
            "Confiança psicológica",
            "Técnica sob máxima tensão",
        ],
    },
    PhaseSeed {
        id: "conjugate-dynamic-effort",
        name: "Esforço Dinâmico",
        weeks: 16,
        focus: "Velocidade e potência",
        volume_load: VolumeLoad::Moderate,
        intensity: (50.0, 60.0),
        rep_ranges: &[3, 5],
        characteristics: &[
            "Velocidade de contração",
            "Potência muscular",
            "Taxa de desenvolvimento de força",
            "Coordenação rápida",
        ],
    },
    PhaseSeed {
        id: "conjugate-repetition",
        name: "Método de Repetições",
        weeks: 16,
        focus: "Hipertrofia e resistência",
        volume_load: VolumeLoad::High,
        intensity: (60.0, 80.0),
        rep_ranges: &[8, 12, 15, 20],
        characteristics: &[
            "Hipertrofia funcional",
            "Resistência muscular",
            "Volume de trabalho",
            "Recuperação entre treinos intensos",
        ],
    },
];

fn draft(
    id: &str,
    name: &str,
    model: PeriodizationModel,
    description: &str,
    duration_weeks: u32,
    phases: &[PhaseSeed],
    recommended_for: &[ExperienceLevel],
) -> ProgramDraft {
    ProgramDraft {
        id: id.to_owned(),
        name: name.to_owned(),
        model,
        description: description.to_owned(),
        duration_weeks,
        phases: phases.iter().map(PhaseSeed::to_phase).collect(),
        recommended_for: recommended_for.to_vec(),
    }
}

/// The four seeded programs, in catalog order
pub fn seed_drafts() -> Vec<ProgramDraft> {
    vec![
        draft(
            program_ids::LINEAR_BASIC,
            "Periodização Linear Tradicional",
            PeriodizationModel::Linear,
            "Progressão gradual com diminuição do volume e aumento da intensidade ao longo do tempo. Ideal para iniciantes e intermediários.",
            12,
            &LINEAR_PHASES,
            &[ExperienceLevel::Beginner, ExperienceLevel::Intermediate],
        ),
        draft(
            program_ids::UNDULATING_DUP,
            "Periodização Ondulatória (DUP)",
            PeriodizationModel::Undulating,
            "Variação constante de volume e intensidade dentro da mesma semana. Ideal para intermediários e avançados.",
            8,
            &UNDULATING_PHASES,
            &[ExperienceLevel::Intermediate, ExperienceLevel::Advanced],
        ),
        draft(
            program_ids::BLOCK_CONJUGATE,
            "Periodização por Blocos",
            PeriodizationModel::Block,
            "Blocos sequenciais focando em qualidades específicas. Acumulação → Transmutação → Realização.",
            12,
            &BLOCK_PHASES,
            &[ExperienceLevel::Advanced],
        ),
        draft(
            program_ids::CONJUGATE_WESTSIDE,
            "Método Conjugado",
            PeriodizationModel::Conjugate,
            "Desenvolvimento simultâneo de diferentes qualidades. Baseado no método Westside Barbell.",
            16,
            &CONJUGATE_PHASES,
            &[ExperienceLevel::Advanced],
        ),
    ]
}
