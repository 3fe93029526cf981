use regresslab_domain::{CourseModule, ExerciseId, LessonSection, ModuleId};

fn lesson(heading: &str, body: &str) -> LessonSection {
    LessonSection {
        heading: heading.to_string(),
        body: body.to_string(),
    }
}

pub(super) fn all() -> Vec<CourseModule> {
    vec![
        CourseModule {
            id: ModuleId::new("module-1"),
            number: 1,
            title: "What Is Regression?".into(),
            summary: "Predicting numbers from data by fitting a line through points.".into(),
            lessons: vec![
                lesson(
                    "Predicting a number",
                    "Regression models predict a continuous target, such as a house price \
                     or tomorrow's temperature, from one or more input features. Unlike \
                     classification, the answer is a number on a scale rather than a label.",
                ),
                lesson(
                    "The straight line",
                    "Simple linear regression assumes the target changes by a fixed amount \
                     for every unit change in the feature: y = w * x + b. The slope w says \
                     how steep the line is and the intercept b says where it crosses the \
                     vertical axis.",
                ),
                lesson(
                    "Residuals",
                    "For every data point, the residual is the observed value minus the \
                     predicted value. A good line keeps residuals small and scattered \
                     evenly above and below it.",
                ),
                lesson(
                    "Least squares",
                    "Ordinary least squares picks the slope and intercept that minimise \
                     the sum of squared residuals. Squaring punishes large misses more \
                     than small ones and gives a closed-form solution.",
                ),
            ],
            exercise: Some(ExerciseId::new("first-regression")),
        },
        CourseModule {
            id: ModuleId::new("module-2"),
            number: 2,
            title: "Loss Functions & Gradient Descent".into(),
            summary: "Measuring error and walking downhill to the best parameters.".into(),
            lessons: vec![
                lesson(
                    "Loss functions",
                    "A loss function turns predictions into a single number describing how \
                     wrong the model is. Mean squared error averages squared residuals; \
                     mean absolute error averages their absolute values and is less \
                     sensitive to outliers.",
                ),
                lesson(
                    "The gradient",
                    "The gradient of the loss points in the direction where the loss grows \
                     fastest. Moving the parameters a small step against the gradient \
                     lowers the loss.",
                ),
                lesson(
                    "Learning rate",
                    "The learning rate sets the step size. Too small and training crawls; \
                     too large and the loss bounces around or explodes instead of settling.",
                ),
            ],
            exercise: Some(ExerciseId::new("gradient-descent")),
        },
        CourseModule {
            id: ModuleId::new("module-3"),
            number: 3,
            title: "Bias, Variance & Overfitting".into(),
            summary: "Why a model can be too simple or too clever for its own good.".into(),
            lessons: vec![
                lesson(
                    "Underfitting",
                    "A model with high bias is too simple to capture the pattern. Its \
                     training error and test error are both high and close together.",
                ),
                lesson(
                    "Overfitting",
                    "A model with high variance memorises noise in the training data. \
                     Training error is tiny but test error is much larger.",
                ),
                lesson(
                    "The trade-off",
                    "Adding flexibility lowers bias but raises variance. The sweet spot is \
                     the model whose test error is lowest, not the one whose training \
                     error is lowest.",
                ),
            ],
            exercise: None,
        },
        CourseModule {
            id: ModuleId::new("module-4"),
            number: 4,
            title: "Regularization: Ridge & Lasso".into(),
            summary: "Penalising large coefficients to tame overfitting.".into(),
            lessons: vec![
                lesson(
                    "Adding a penalty",
                    "Regularization adds a penalty on coefficient size to the loss. The \
                     strength lambda controls the trade-off between fitting the data and \
                     keeping the model simple.",
                ),
                lesson(
                    "Ridge regression",
                    "Ridge uses an L2 penalty, the sum of squared coefficients. It shrinks \
                     every coefficient smoothly toward zero but rarely makes any exactly zero.",
                ),
                lesson(
                    "Lasso regression",
                    "Lasso uses an L1 penalty, the sum of absolute coefficients. It can set \
                     coefficients exactly to zero, performing feature selection.",
                ),
                lesson(
                    "Choosing lambda",
                    "Lambda is a hyperparameter. Too little leaves overfitting in place; too \
                     much flattens the model into underfitting. Cross-validation finds the \
                     middle ground.",
                ),
            ],
            exercise: Some(ExerciseId::new("ridge-by-hand")),
        },
        CourseModule {
            id: ModuleId::new("module-5"),
            number: 5,
            title: "Evaluating Models: Splits & Cross-Validation".into(),
            summary: "Estimating how a model will do on data it has never seen.".into(),
            lessons: vec![
                lesson(
                    "Hold-out test set",
                    "A train/test split reserves part of the data for a final, honest \
                     estimate of performance. The test set is never used to fit or tune \
                     the model.",
                ),
                lesson(
                    "How much to hold out",
                    "Small datasets need a larger share for testing to get a stable \
                     estimate. With millions of rows, a few percent is already tens of \
                     thousands of examples.",
                ),
                lesson(
                    "K-fold cross-validation",
                    "K-fold cross-validation splits the training data into k folds, trains \
                     k models each leaving one fold out, and averages their scores. More \
                     folds mean less biased estimates but more training runs.",
                ),
            ],
            exercise: Some(ExerciseId::new("k-fold")),
        },
        CourseModule {
            id: ModuleId::new("module-6"),
            number: 6,
            title: "Bayesian Regression".into(),
            summary: "Treating coefficients as beliefs that data updates.".into(),
            lessons: vec![
                lesson(
                    "Priors",
                    "A prior describes what you believe about the coefficients before \
                     seeing data. A narrow prior encodes strong knowledge; a wide prior \
                     lets the data decide.",
                ),
                lesson(
                    "Posteriors",
                    "Bayes' rule combines the prior with the likelihood of the data to \
                     produce the posterior. With little data the posterior stays near the \
                     prior; with lots of data it follows the data.",
                ),
                lesson(
                    "Uncertainty",
                    "Instead of one line, Bayesian regression yields a distribution of \
                     lines. Predictions come with credible intervals that widen where data \
                     is sparse.",
                ),
            ],
            exercise: None,
        },
        CourseModule {
            id: ModuleId::new("module-7"),
            number: 7,
            title: "Pipelines & Data Leakage".into(),
            summary: "Putting it all together without cheating by accident.".into(),
            lessons: vec![
                lesson(
                    "The pipeline",
                    "A modelling pipeline chains the steps: split the data, fit \
                     preprocessing on the training set, train, tune with cross-validation, \
                     and evaluate once on the test set.",
                ),
                lesson(
                    "Data leakage",
                    "Leakage happens when information from the test set sneaks into \
                     training, for example by scaling features with statistics computed on \
                     the full dataset. Scores look great and then collapse in production.",
                ),
                lesson(
                    "Guarding against leaks",
                    "Split first. Fit every transformation on training data only and apply \
                     it to the test data. Touch the test set exactly once.",
                ),
            ],
            exercise: None,
        },
    ]
}
