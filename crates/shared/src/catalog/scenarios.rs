use regresslab_domain::{GameKind, PenaltyKind, Scenario, ScenarioChoice, ScenarioParams, ScenarioPool};

fn card(
    id: &str,
    prompt: &str,
    params: ScenarioParams,
    choices: Vec<ScenarioChoice>,
    correct: &str,
    explanation: &str,
) -> Scenario {
    Scenario {
        id: id.to_string(),
        prompt: prompt.to_string(),
        params,
        choices,
        correct: correct.to_string(),
        explanation: explanation.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn all() -> Vec<ScenarioPool> {
    vec![
        bias_variance(),
        regularization(),
        train_test_split(),
        cross_validation(),
        bayesian_prior(),
        data_leakage(),
        pipeline_order(),
    ]
}

fn diagnosis() -> Vec<ScenarioChoice> {
    vec![
        ScenarioChoice::new("underfit", "Underfitting (high bias)"),
        ScenarioChoice::new("overfit", "Overfitting (high variance)"),
        ScenarioChoice::new("good-fit", "Healthy fit"),
    ]
}

fn bias_variance() -> ScenarioPool {
    let patient = |id: &str, train_error: f64, test_error: f64, correct: &str, explanation: &str| {
        card(
            id,
            "Here is the patient's chart. What is the diagnosis?",
            ScenarioParams::BiasVariance {
                train_error,
                test_error,
            },
            diagnosis(),
            correct,
            explanation,
        )
    };
    ScenarioPool {
        game: GameKind::BiasVariance,
        scenarios: vec![
            patient(
                "deep-tree",
                2.0,
                25.0,
                "overfit",
                "Training error is tiny but test error is more than ten times larger: \
                 the model memorised its training data.",
            ),
            patient(
                "flat-line",
                30.0,
                31.0,
                "underfit",
                "Both errors are high and nearly equal, so the model is too simple to \
                 capture the pattern.",
            ),
            patient(
                "tuned-forest",
                5.0,
                6.0,
                "good-fit",
                "Both errors are low and close together. Nothing to treat.",
            ),
            patient(
                "wiggly-polynomial",
                0.5,
                18.0,
                "overfit",
                "A near-zero training error paired with a large test error is classic \
                 high variance.",
            ),
            patient(
                "mean-predictor",
                45.0,
                44.0,
                "underfit",
                "Predicting roughly the average everywhere leaves both errors large.",
            ),
            patient(
                "ridge-model",
                8.0,
                9.5,
                "good-fit",
                "A small, stable gap with low errors is what a well-regularized model \
                 looks like.",
            ),
        ],
    }
}

fn lambdas() -> Vec<ScenarioChoice> {
    vec![
        ScenarioChoice::valued("none", "λ = 0 (no penalty)", 0.0),
        ScenarioChoice::valued("small", "λ = 0.1", 0.1),
        ScenarioChoice::valued("medium", "λ = 1", 1.0),
        ScenarioChoice::valued("large", "λ = 100", 100.0),
    ]
}

fn regularization() -> ScenarioPool {
    let model = |id: &str,
                 prompt: &str,
                 penalty: PenaltyKind,
                 coefficients: &[f64],
                 correct: &str,
                 explanation: &str| {
        card(
            id,
            prompt,
            ScenarioParams::Regularization {
                penalty,
                coefficients: coefficients.to_vec(),
            },
            lambdas(),
            correct,
            explanation,
        )
    };
    ScenarioPool {
        game: GameKind::Regularization,
        scenarios: vec![
            model(
                "exploding-ridge",
                "A ridge model has huge coefficients, training error 1 and test error 40. \
                 Which lambda?",
                PenaltyKind::Ridge,
                &[48.0, -35.0, 27.0, -19.0],
                "medium",
                "The model overfits badly, so it needs a real penalty. λ = 1 halves every \
                 coefficient without flattening the model.",
            ),
            model(
                "flattened-ridge",
                "A ridge model's coefficients are all near zero and both errors are high. \
                 Which lambda?",
                PenaltyKind::Ridge,
                &[0.4, -0.3, 0.2],
                "none",
                "The model is already underfitting; any penalty makes it worse.",
            ),
            model(
                "noisy-features",
                "A lasso model uses 6 features but only 2 matter. Test error is double \
                 training error. Which lambda?",
                PenaltyKind::Lasso,
                &[5.0, 3.5, 0.6, -0.4, 0.3, -0.5],
                "medium",
                "λ = 1 zeroes the four weak coefficients and keeps the two real signals.",
            ),
            model(
                "slight-gap",
                "A ridge model fits well with a small train-test gap. Which lambda?",
                PenaltyKind::Ridge,
                &[3.0, -2.0, 1.5],
                "small",
                "A light touch is enough; a big penalty would cause underfitting.",
            ),
            model(
                "overtuned-lasso",
                "A lasso model was given λ = 100 and now predicts a constant. What should \
                 it use instead?",
                PenaltyKind::Lasso,
                &[4.0, -2.5, 1.8],
                "small",
                "Huge lasso penalties wipe out every coefficient. Back off to a small value.",
            ),
            model(
                "many-weak-signals",
                "Twenty correlated features each carry a little signal and the model \
                 overfits. Which lambda for ridge?",
                PenaltyKind::Ridge,
                &[12.0, -11.0, 10.0, -9.0, 8.0],
                "medium",
                "Ridge spreads weight across correlated features; a moderate penalty tames \
                 the variance without discarding any of them.",
            ),
        ],
    }
}

fn ratios() -> Vec<ScenarioChoice> {
    vec![
        ScenarioChoice::valued("50/50", "50% train / 50% test", 0.5),
        ScenarioChoice::valued("70/30", "70% train / 30% test", 0.7),
        ScenarioChoice::valued("80/20", "80% train / 20% test", 0.8),
        ScenarioChoice::valued("95/5", "95% train / 5% test", 0.95),
        ScenarioChoice::valued("99/1", "99% train / 1% test", 0.99),
    ]
}

fn train_test_split() -> ScenarioPool {
    let dataset = |id: &str, data_size: u64, correct: &str, explanation: &str| {
        card(
            id,
            "How should you split this dataset?",
            ScenarioParams::TrainTestSplit { data_size },
            ratios(),
            correct,
            explanation,
        )
    };
    ScenarioPool {
        game: GameKind::TrainTestSplit,
        scenarios: vec![
            dataset(
                "million-rows",
                1_000_000,
                "95/5",
                "Five percent is already 50,000 test rows, plenty for a stable estimate, \
                 and the model gets to learn from the rest.",
            ),
            dataset(
                "small-survey",
                200,
                "70/30",
                "With only 200 rows the test set needs a bigger share to give a \
                 trustworthy score.",
            ),
            dataset(
                "mid-size",
                10_000,
                "80/20",
                "The classic 80/20 split gives 2,000 test rows, a good balance at this size.",
            ),
            dataset(
                "web-logs",
                100_000_000,
                "99/1",
                "One percent of a hundred million is a million rows, far more than enough \
                 for testing.",
            ),
            dataset(
                "clinic-records",
                5_000,
                "80/20",
                "A thousand test rows is a reasonable estimate without starving training.",
            ),
            dataset(
                "sensor-stream",
                2_000_000,
                "95/5",
                "A hundred thousand held-out rows is already generous.",
            ),
        ],
    }
}

fn folds(data_size: u64) -> Vec<ScenarioChoice> {
    vec![
        ScenarioChoice::valued("k-3", "3 folds", 3.0),
        ScenarioChoice::valued("k-5", "5 folds", 5.0),
        ScenarioChoice::valued("k-10", "10 folds", 10.0),
        ScenarioChoice::valued("loo", "Leave-one-out", data_size as f64),
    ]
}

fn cross_validation() -> ScenarioPool {
    let setup = |id: &str, prompt: &str, data_size: u64, fit_seconds: f64, correct: &str, explanation: &str| {
        card(
            id,
            prompt,
            ScenarioParams::CrossValidation {
                data_size,
                fit_seconds,
            },
            folds(data_size),
            correct,
            explanation,
        )
    };
    ScenarioPool {
        game: GameKind::CrossValidation,
        scenarios: vec![
            setup(
                "tiny-study",
                "50 patients, a linear model that fits in milliseconds. How many folds?",
                50,
                0.01,
                "loo",
                "With so little data every row counts, and fitting 50 tiny models is free.",
            ),
            setup(
                "slow-network",
                "A million images and a model that trains for 6 hours. How many folds?",
                1_000_000,
                21_600.0,
                "k-3",
                "Each fold costs six hours. Three folds keeps the bill at 18 hours.",
            ),
            setup(
                "everyday-table",
                "20,000 rows and a gradient boosting model that fits in 30 seconds. How \
                 many folds?",
                20_000,
                30.0,
                "k-5",
                "Five folds is the usual default: stable scores for a few minutes of compute.",
            ),
            setup(
                "noisy-small",
                "800 rows of noisy survey data, a model that fits in one second. How many \
                 folds?",
                800,
                1.0,
                "k-10",
                "Ten folds gives each model 90% of the scarce data and a steadier average.",
            ),
            setup(
                "medium-slow",
                "100,000 rows, a model that takes 20 minutes to fit, a deadline tomorrow. \
                 How many folds?",
                100_000,
                1_200.0,
                "k-5",
                "Five twenty-minute fits fit the deadline; ten would take over three hours.",
            ),
            setup(
                "huge-and-slow",
                "50 million rows, 2 hours per fit. How many folds?",
                50_000_000,
                7_200.0,
                "k-3",
                "Big data already gives stable scores; keep the number of expensive fits low.",
            ),
        ],
    }
}

fn priors() -> Vec<ScenarioChoice> {
    vec![
        ScenarioChoice::valued("flat", "Flat prior (let the data decide)", 0.0),
        ScenarioChoice::valued("weak", "Weak prior (worth 2 observations)", 2.0),
        ScenarioChoice::valued("strong", "Strong prior (worth 50 observations)", 50.0),
    ]
}

fn bayesian_prior() -> ScenarioPool {
    let belief = |id: &str,
                  prompt: &str,
                  prior_mean: f64,
                  sample_mean: f64,
                  observations: u32,
                  correct: &str,
                  explanation: &str| {
        card(
            id,
            prompt,
            ScenarioParams::BayesianPrior {
                prior_mean,
                sample_mean,
                observations,
            },
            priors(),
            correct,
            explanation,
        )
    };
    ScenarioPool {
        game: GameKind::BayesianPrior,
        scenarios: vec![
            belief(
                "rainy-july",
                "Thirty years of records say July has 4 rainy days. This July has had 3 \
                 rainy days in its first 3 days. Which prior?",
                4.0,
                31.0,
                3,
                "strong",
                "Decades of reliable history should not be overturned by three days of data.",
            ),
            belief(
                "new-product",
                "A brand new product with no sales history. You have 5,000 days of sales \
                 from a pilot. Which prior?",
                0.0,
                120.0,
                5_000,
                "flat",
                "You know nothing beforehand and have plenty of data; let it speak.",
            ),
            belief(
                "drug-dose",
                "Published studies suggest a dose effect around 2.0. Your small trial of 8 \
                 patients measured 3.1. Which prior?",
                2.0,
                3.1,
                8,
                "weak",
                "Some prior knowledge exists, but your own trial deserves a real say.",
            ),
            belief(
                "coin-factory",
                "A factory has produced millions of fair coins. A new coin lands heads 4 \
                 times out of 5. Which prior?",
                0.5,
                0.8,
                5,
                "strong",
                "Five flips are far too few to doubt a production line with millions of \
                 fair coins.",
            ),
            belief(
                "startup-growth",
                "An analyst guesses 10% growth from gut feeling. Two years of monthly data \
                 show 25%. Which prior?",
                10.0,
                25.0,
                24,
                "weak",
                "A gut feeling is only worth a couple of observations against two years of \
                 data.",
            ),
            belief(
                "exploration",
                "Exploring an unfamiliar dataset with 10,000 rows and no domain expert. \
                 Which prior?",
                0.0,
                7.5,
                10_000,
                "flat",
                "Without prior knowledge, a flat prior avoids injecting made-up beliefs.",
            ),
        ],
    }
}

fn data_leakage() -> ScenarioPool {
    let pipeline = |id: &str, steps: &[&str], correct: &str, explanation: &str| {
        let choices = steps
            .iter()
            .enumerate()
            .map(|(i, step)| ScenarioChoice::new(format!("step-{}", i + 1), *step))
            .collect();
        card(
            id,
            "Which step leaks information from the test set?",
            ScenarioParams::DataLeakage {
                steps: strings(steps),
            },
            choices,
            correct,
            explanation,
        )
    };
    ScenarioPool {
        game: GameKind::DataLeakage,
        scenarios: vec![
            pipeline(
                "scale-then-split",
                &[
                    "Standardize every feature using the full dataset",
                    "Split into train and test",
                    "Fit linear regression on train",
                    "Evaluate on test",
                ],
                "step-1",
                "The scaler's mean and spread were computed with test rows included.",
            ),
            pipeline(
                "impute-with-global-mean",
                &[
                    "Split into train and test",
                    "Fill missing values with the mean of all rows",
                    "Fit ridge regression on train",
                    "Evaluate on test",
                ],
                "step-2",
                "The fill value uses test rows. Compute it on the training set only.",
            ),
            pipeline(
                "select-features-first",
                &[
                    "Pick the 10 features most correlated with the target on all data",
                    "Split into train and test",
                    "Fit lasso on train",
                    "Evaluate on test",
                ],
                "step-1",
                "Feature selection looked at the test targets before the split.",
            ),
            pipeline(
                "tune-on-test",
                &[
                    "Split into train and test",
                    "Fit the scaler on train",
                    "Try 20 lambdas and keep the one with the best test score",
                    "Report that test score",
                ],
                "step-3",
                "Choosing lambda by test score turns the test set into a validation set.",
            ),
            pipeline(
                "future-feature",
                &[
                    "Add 'days until customer cancelled' as a feature",
                    "Split into train and test",
                    "Fit the churn regression on train",
                    "Evaluate on test",
                ],
                "step-1",
                "That feature is only known after the outcome happens: target leakage.",
            ),
            pipeline(
                "oversample-before-split",
                &[
                    "Duplicate rare high-value rows to balance the data",
                    "Split into train and test",
                    "Fit the model on train",
                    "Evaluate on test",
                ],
                "step-1",
                "Copies of the same row can land on both sides of the split.",
            ),
        ],
    }
}

fn pipeline_order() -> ScenarioPool {
    const STEPS: [(&str, &str); 6] = [
        ("split", "Split into train and test"),
        ("scale", "Fit the scaler on the training set"),
        ("train", "Train the model"),
        ("tune", "Tune hyperparameters with cross-validation"),
        ("evaluate", "Evaluate once on the test set"),
        ("deploy", "Deploy and monitor"),
    ];
    let options = || {
        STEPS
            .iter()
            .map(|(id, label)| ScenarioChoice::new(*id, *label))
            .collect::<Vec<_>>()
    };
    let explanations = [
        "Split first so no later step can peek at the test rows.",
        "Preprocessing is fitted on training data only, then applied to test data.",
        "With clean, scaled features the model can be trained.",
        "Cross-validation on the training set picks hyperparameters without touching \
         the test set.",
        "The untouched test set gives one honest estimate of performance.",
        "Only a model that passed evaluation goes to production, where it is monitored.",
    ];

    let scenarios = STEPS
        .iter()
        .zip(explanations)
        .enumerate()
        .map(|(round, ((id, _), explanation))| {
            let completed: Vec<String> = STEPS[..round].iter().map(|(_, l)| l.to_string()).collect();
            card(
                &format!("pipeline-step-{}", round + 1),
                "Steps so far are listed below. What comes next?",
                ScenarioParams::PipelineOrder { completed },
                options(),
                id,
                explanation,
            )
        })
        .collect();

    ScenarioPool {
        game: GameKind::PipelineOrder,
        scenarios,
    }
}
