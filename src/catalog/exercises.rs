// ABOUTME: Reference exercise library with muscle group, type, equipment, and difficulty
// ABOUTME: Twelve staple lifts with execution cues, queryable by id, difficulty, and muscle group
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use periodization_core::models::{Exercise, ExerciseType, ExperienceLevel, MuscleGroup};
use std::sync::OnceLock;

static EXERCISE_CATALOG: OnceLock<ExerciseCatalog> = OnceLock::new();

struct ExerciseSeed {
    id: &'static str,
    name: &'static str,
    category: MuscleGroup,
    exercise_type: ExerciseType,
    equipment: &'static [&'static str],
    difficulty: ExperienceLevel,
    instructions: &'static [&'static str],
}

impl ExerciseSeed {
    fn to_exercise(&self) -> Exercise {
        Exercise {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            category: self.category,
            exercise_type: self.exercise_type,
            equipment: self.equipment.iter().map(|e| (*e).to_owned()).collect(),
            difficulty: self.difficulty,
            instructions: self.instructions.iter().map(|i| (*i).to_owned()).collect(),
            video_url: None,
        }
    }
}

const EXERCISES: [ExerciseSeed; 12] = [
    ExerciseSeed {
        id: "bench-press",
        name: "Supino Reto",
        category: MuscleGroup::Chest,
        exercise_type: ExerciseType::Compound,
        equipment: &["barbell", "bench"],
        difficulty: ExperienceLevel::Beginner,
        instructions: &[
            "Deite-se no banco com os pés firmes no chão",
            "Posicione as mãos na barra com pegada ligeiramente mais larga que os ombros",
            "Retire a barra do suporte e posicione sobre o peito",
            "Desça a barra controladamente até tocar o peito",
            "Empurre a barra de volta à posição inicial",
        ],
    },
    ExerciseSeed {
        id: "incline-bench-press",
        name: "Supino Inclinado",
        category: MuscleGroup::Chest,
        exercise_type: ExerciseType::Compound,
        equipment: &["barbell", "incline-bench"],
        difficulty: ExperienceLevel::Beginner,
        instructions: &[
            "Ajuste o banco para 30-45 graus de inclinação",
            "Posicione-se como no supino reto",
            "Mantenha os ombros retraídos durante o movimento",
            "Desça a barra até a parte superior do peito",
            "Empurre explosivamente de volta ao topo",
        ],
    },
    ExerciseSeed {
        id: "dumbbell-flyes",
        name: "Crucifixo com Halteres",
        category: MuscleGroup::Chest,
        exercise_type: ExerciseType::Isolation,
        equipment: &["dumbbells", "bench"],
        difficulty: ExperienceLevel::Intermediate,
        instructions: &[
            "Deite-se no banco segurando halteres acima do peito",
            "Mantenha uma ligeira flexão nos cotovelos",
            "Abra os braços em arco até sentir alongamento no peito",
            "Retorne à posição inicial contraindo o peitoral",
            "Mantenha o controle durante todo o movimento",
        ],
    },
    ExerciseSeed {
        id: "deadlift",
        name: "Levantamento Terra",
        category: MuscleGroup::Back,
        exercise_type: ExerciseType::Compound,
        equipment: &["barbell"],
        difficulty: ExperienceLevel::Intermediate,
        instructions: &[
            "Posicione-se com os pés na largura dos quadris",
            "Segure a barra com pegada pronada, mãos na largura dos ombros",
            "Mantenha o peito erguido e as costas retas",
            "Levante a barra estendendo quadris e joelhos simultaneamente",
            "Termine em pé com ombros para trás",
        ],
    },
    ExerciseSeed {
        id: "pull-ups",
        name: "Barra Fixa",
        category: MuscleGroup::Back,
        exercise_type: ExerciseType::Compound,
        equipment: &["pull-up-bar"],
        difficulty: ExperienceLevel::Intermediate,
        instructions: &[
            "Pendure-se na barra com pegada pronada",
            "Puxe o corpo para cima até o queixo passar da barra",
            "Desça controladamente até extensão completa dos braços",
            "Mantenha o core contraído durante o movimento",
            "Evite balançar o corpo",
        ],
    },
    ExerciseSeed {
        id: "barbell-rows",
        name: "Remada Curvada",
        category: MuscleGroup::Back,
        exercise_type: ExerciseType::Compound,
        equipment: &["barbell"],
        difficulty: ExperienceLevel::Intermediate,
        instructions: &[
            "Segure a barra com pegada pronada",
            "Incline o tronco para frente mantendo as costas retas",
            "Puxe a barra em direção ao abdômen",
            "Contraia as escápulas no topo do movimento",
            "Desça a barra controladamente",
        ],
    },
    ExerciseSeed {
        id: "squat",
        name: "Agachamento",
        category: MuscleGroup::Legs,
        exercise_type: ExerciseType::Compound,
        equipment: &["barbell", "squat-rack"],
        difficulty: ExperienceLevel::Beginner,
        instructions: &[
            "Posicione a barra nos trapézios superiores",
            "Pés na largura dos ombros, dedos ligeiramente para fora",
            "Desça flexionando quadris e joelhos simultaneamente",
            "Desça até as coxas ficarem paralelas ao chão",
            "Suba empurrando o chão com os pés",
        ],
    },
    ExerciseSeed {
        id: "leg-press",
        name: "Leg Press",
        category: MuscleGroup::Legs,
        exercise_type: ExerciseType::Compound,
        equipment: &["leg-press-machine"],
        difficulty: ExperienceLevel::Beginner,
        instructions: &[
            "Sente-se no leg press com as costas apoiadas",
            "Posicione os pés na plataforma na largura dos ombros",
            "Desça até formar ângulo de 90 graus nos joelhos",
            "Empurre a plataforma de volta à posição inicial",
            "Mantenha o controle durante todo o movimento",
        ],
    },
    ExerciseSeed {
        id: "overhead-press",
        name: "Desenvolvimento Militar",
        category: MuscleGroup::Shoulders,
        exercise_type: ExerciseType::Compound,
        equipment: &["barbell"],
        difficulty: ExperienceLevel::Intermediate,
        instructions: &[
            "Segure a barra na altura dos ombros",
            "Pés na largura dos quadris, core contraído",
            "Empurre a barra diretamente para cima",
            "Estenda completamente os braços acima da cabeça",
            "Desça a barra controladamente até os ombros",
        ],
    },
    ExerciseSeed {
        id: "lateral-raises",
        name: "Elevação Lateral",
        category: MuscleGroup::Shoulders,
        exercise_type: ExerciseType::Isolation,
        equipment: &["dumbbells"],
        difficulty: ExperienceLevel::Beginner,
        instructions: &[
            "Segure halteres ao lado do corpo",
            "Levante os braços lateralmente até a altura dos ombros",
            "Mantenha uma ligeira flexão nos cotovelos",
            "Desça controladamente à posição inicial",
            "Evite usar impulso",
        ],
    },
    ExerciseSeed {
        id: "barbell-curls",
        name: "Rosca Direta",
        category: MuscleGroup::Arms,
        exercise_type: ExerciseType::Isolation,
        equipment: &["barbell"],
        difficulty: ExperienceLevel::Beginner,
        instructions: &[
            "Segure a barra com pegada supinada",
            "Mantenha os cotovelos próximos ao corpo",
            "Flexione os braços elevando a barra",
            "Contraia o bíceps no topo do movimento",
            "Desça a barra controladamente",
        ],
    },
    ExerciseSeed {
        id: "tricep-dips",
        name: "Mergulho em Paralelas",
        category: MuscleGroup::Arms,
        exercise_type: ExerciseType::Compound,
        equipment: &["parallel-bars"],
        difficulty: ExperienceLevel::Intermediate,
        instructions: &[
            "Apoie-se nas paralelas com braços estendidos",
            "Desça o corpo flexionando os cotovelos",
            "Desça até sentir alongamento no peito",
            "Empurre o corpo de volta à posição inicial",
            "Mantenha o tronco ligeiramente inclinado",
        ],
    },
];

/// Read-only exercise library
#[derive(Debug, Clone)]
pub struct ExerciseCatalog {
    exercises: Vec<Exercise>,
}

impl Default for ExerciseCatalog {
    fn default() -> Self {
        Self {
            exercises: EXERCISES.iter().map(ExerciseSeed::to_exercise).collect(),
        }
    }
}

impl ExerciseCatalog {
    /// Process-wide exercise library
    pub fn global() -> &'static Self {
        EXERCISE_CATALOG.get_or_init(Self::default)
    }

    /// All exercises in library order
    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Look up an exercise by id
    #[must_use]
    pub fn get_exercise_by_id(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|exercise| exercise.id == id)
    }

    /// Exercises with exactly this difficulty
    #[must_use]
    pub fn get_exercises_by_difficulty(&self, difficulty: ExperienceLevel) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|exercise| exercise.difficulty == difficulty)
            .collect()
    }

    /// Exercises whose primary muscle group matches
    #[must_use]
    pub fn get_exercises_by_muscle_group(&self, group: MuscleGroup) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|exercise| exercise.category == group)
            .collect()
    }
}
