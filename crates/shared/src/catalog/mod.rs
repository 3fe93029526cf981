//! Course catalog
//!
//! Every piece of literal course content lives here and is built once on
//! first access. Accessors hand out references into the lazily built
//! catalog; lookups by slug return `None` for unknown slugs so routes can
//! render a not-found view.

mod exercises;
mod glossary;
mod modules;
mod quizzes;
mod scenarios;
mod stories;

use once_cell::sync::Lazy;
use thiserror::Error;

use regresslab_domain::{
    CodeExercise, CourseModule, DomainError, ExerciseId, GameKind, GlossaryIndex,
    ModuleId, Quiz, ScenarioPool, Story, StoryId,
};

struct Catalog {
    modules: Vec<CourseModule>,
    quizzes: Vec<Quiz>,
    glossary: GlossaryIndex,
    stories: Vec<Story>,
    exercises: Vec<CodeExercise>,
    scenario_pools: Vec<ScenarioPool>,
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    let catalog = Catalog {
        modules: modules::all(),
        quizzes: quizzes::all(),
        glossary: GlossaryIndex::build(glossary::all()),
        stories: stories::all(),
        exercises: exercises::all(),
        scenario_pools: scenarios::all(),
    };
    tracing::debug!(
        modules = catalog.modules.len(),
        glossary_terms = catalog.glossary.len(),
        stories = catalog.stories.len(),
        "Course catalog built"
    );
    catalog
});

pub fn modules() -> &'static [CourseModule] {
    &CATALOG.modules
}

pub fn module(id: &ModuleId) -> Option<&'static CourseModule> {
    CATALOG.modules.iter().find(|m| &m.id == id)
}

pub fn module_ids() -> Vec<ModuleId> {
    CATALOG.modules.iter().map(|m| m.id.clone()).collect()
}

pub fn quiz(module: &ModuleId) -> Option<&'static Quiz> {
    CATALOG.quizzes.iter().find(|q| &q.module == module)
}

pub fn glossary() -> &'static GlossaryIndex {
    &CATALOG.glossary
}

pub fn stories() -> &'static [Story] {
    &CATALOG.stories
}

pub fn story(id: &StoryId) -> Option<&'static Story> {
    CATALOG.stories.iter().find(|s| &s.id == id)
}

pub fn code_exercise(id: &ExerciseId) -> Option<&'static CodeExercise> {
    CATALOG.exercises.iter().find(|e| &e.id == id)
}

pub fn scenario_pool(game: GameKind) -> Option<&'static ScenarioPool> {
    CATALOG.scenario_pools.iter().find(|p| p.game == game)
}

/// Which module teaches the ideas each game practises.
const GAME_MODULES: [(GameKind, &str); 7] = [
    (GameKind::BiasVariance, "module-3"),
    (GameKind::Regularization, "module-4"),
    (GameKind::TrainTestSplit, "module-5"),
    (GameKind::CrossValidation, "module-5"),
    (GameKind::BayesianPrior, "module-6"),
    (GameKind::DataLeakage, "module-7"),
    (GameKind::PipelineOrder, "module-7"),
];

pub fn games_for_module(id: &ModuleId) -> Vec<GameKind> {
    GAME_MODULES
        .iter()
        .filter(|(_, module)| id.as_str() == *module)
        .map(|(game, _)| *game)
        .collect()
}

pub fn module_for_game(game: GameKind) -> Option<&'static CourseModule> {
    GAME_MODULES
        .iter()
        .find(|(g, _)| *g == game)
        .and_then(|(_, slug)| module(&ModuleId::new(*slug)))
}

/// One integrity problem found in the static content.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogIssue {
    #[error("{0}")]
    Invalid(#[from] DomainError),

    #[error("{kind} '{id}' referenced by {from} does not exist")]
    Dangling {
        kind: &'static str,
        id: String,
        from: String,
    },

    #[error("duplicate {kind} '{id}'")]
    Duplicate { kind: &'static str, id: String },

    #[error("module {0} has no quiz")]
    MissingQuiz(ModuleId),

    #[error("game {0} has no scenario pool")]
    MissingPool(GameKind),
}

/// Check every answer key, ordering and cross reference in the catalog.
pub fn validate_catalog() -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let catalog = &*CATALOG;

    let mut seen = std::collections::HashSet::new();
    for module in &catalog.modules {
        if !seen.insert(module.id.clone()) {
            issues.push(CatalogIssue::Duplicate {
                kind: "module",
                id: module.id.to_string(),
            });
        }
        if quiz(&module.id).is_none() {
            issues.push(CatalogIssue::MissingQuiz(module.id.clone()));
        }
        if let Some(exercise) = &module.exercise {
            if code_exercise(exercise).is_none() {
                issues.push(CatalogIssue::Dangling {
                    kind: "exercise",
                    id: exercise.to_string(),
                    from: module.id.to_string(),
                });
            }
        }
    }

    for quiz in &catalog.quizzes {
        if let Err(e) = quiz.validate() {
            issues.push(e.into());
        }
        if module(&quiz.module).is_none() {
            issues.push(CatalogIssue::Dangling {
                kind: "module",
                id: quiz.module.to_string(),
                from: "quiz".to_string(),
            });
        }
    }

    for exercise in &catalog.exercises {
        if let Err(e) = exercise.validate() {
            issues.push(e.into());
        }
    }

    for entry in catalog.glossary.entries() {
        if module(&entry.module).is_none() {
            issues.push(CatalogIssue::Dangling {
                kind: "module",
                id: entry.module.to_string(),
                from: format!("glossary term {}", entry.term),
            });
        }
        for related in &entry.related {
            if catalog.glossary.lookup(related).is_none() {
                issues.push(CatalogIssue::Dangling {
                    kind: "glossary term",
                    id: related.clone(),
                    from: format!("glossary term {}", entry.term),
                });
            }
        }
    }

    for story in &catalog.stories {
        if let Some(m) = &story.module {
            if module(m).is_none() {
                issues.push(CatalogIssue::Dangling {
                    kind: "module",
                    id: m.to_string(),
                    from: format!("story {}", story.id),
                });
            }
        }
    }

    for game in GameKind::ALL {
        match scenario_pool(game) {
            Some(pool) => {
                if let Err(e) = pool.validate() {
                    issues.push(e.into());
                }
            }
            None => issues.push(CatalogIssue::MissingPool(game)),
        }
        if module_for_game(game).is_none() {
            issues.push(CatalogIssue::Dangling {
                kind: "module",
                id: format!("for {}", game.slug()),
                from: "game table".to_string(),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use regresslab_domain::{ScenarioGame, ScenarioParams, SequenceRandom};

    #[test]
    fn catalog_has_no_integrity_issues() {
        let issues = validate_catalog();
        assert!(issues.is_empty(), "catalog issues: {issues:#?}");
    }

    #[test]
    fn unknown_slugs_are_none() {
        assert!(module(&ModuleId::new("module-99")).is_none());
        assert!(story(&StoryId::new("missing")).is_none());
    }

    #[test]
    fn every_game_can_be_played() {
        for game in GameKind::ALL {
            let pool = scenario_pool(game).unwrap().clone();
            let mut session = ScenarioGame::new(pool).unwrap();
            session.start(&mut SequenceRandom::identity()).unwrap();
            assert_eq!(session.total_rounds(), game.rounds());
        }
    }

    #[test]
    fn overfit_example_is_keyed_as_overfit() {
        let pool = scenario_pool(GameKind::BiasVariance).unwrap();
        let scenario = pool
            .scenarios
            .iter()
            .find(|s| {
                matches!(
                    s.params,
                    ScenarioParams::BiasVariance { train_error, test_error }
                        if train_error == 2.0 && test_error == 25.0
                )
            })
            .unwrap();
        assert_eq!(scenario.correct, "overfit");
        assert!(scenario.is_correct("overfit"));
    }

    #[test]
    fn million_row_split_is_keyed_as_95_5() {
        let pool = scenario_pool(GameKind::TrainTestSplit).unwrap();
        let scenario = pool
            .scenarios
            .iter()
            .find(|s| matches!(s.params, ScenarioParams::TrainTestSplit { data_size: 1_000_000 }))
            .unwrap();
        assert_eq!(scenario.correct, "95/5");
        assert!(!scenario.is_correct("80/20"));
    }

    #[test]
    fn wrong_split_does_not_score_in_a_game() {
        let mut pool = scenario_pool(GameKind::TrainTestSplit).unwrap().clone();
        // Put the million-row card first so the identity shuffle deals it.
        let idx = pool
            .scenarios
            .iter()
            .position(|s| matches!(s.params, ScenarioParams::TrainTestSplit { data_size: 1_000_000 }))
            .unwrap();
        pool.scenarios.swap(0, idx);

        let mut game = ScenarioGame::new(pool).unwrap();
        game.start(&mut SequenceRandom::identity()).unwrap();
        assert!(!game.choose("80/20").unwrap());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn games_map_back_to_their_module() {
        let games = games_for_module(&ModuleId::new("module-5"));
        assert_eq!(games, vec![GameKind::TrainTestSplit, GameKind::CrossValidation]);
        assert!(games_for_module(&ModuleId::new("module-1")).is_empty());
        assert_eq!(
            module_for_game(GameKind::BayesianPrior).map(|m| m.number),
            Some(6)
        );
    }

    #[test]
    fn glossary_finds_terms_from_lesson_text() {
        let index = glossary();
        assert!(index.lookup_selection("Overfitting").is_some());
        assert!(index.lookup_selection("residuals,").is_some());
    }
}
