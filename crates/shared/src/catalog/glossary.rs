use regresslab_domain::GlossaryEntry;

pub(super) fn all() -> Vec<GlossaryEntry> {
    vec![
        GlossaryEntry::new(
            "Regression",
            "A supervised learning task that predicts a continuous numeric value.",
            "Guessing someone's height from their shoe size.",
            "module-1",
        )
        .with_related(&["Linear Regression", "Feature", "Target"]),
        GlossaryEntry::new(
            "Linear Regression",
            "A model that predicts the target as a weighted sum of features plus an intercept.",
            "Drawing the single straightest line through a cloud of dots.",
            "module-1",
        )
        .with_related(&["Slope", "Intercept", "Least Squares"]),
        GlossaryEntry::new(
            "Feature",
            "An input variable used to make a prediction.",
            "The clues a detective looks at.",
            "module-1",
        )
        .with_related(&["Target"]),
        GlossaryEntry::new(
            "Target",
            "The value a model is trained to predict.",
            "The answer at the back of the textbook.",
            "module-1",
        )
        .with_related(&["Feature"]),
        GlossaryEntry::new(
            "Slope",
            "How much the prediction changes for a one-unit increase in a feature.",
            "How steep a hill is: metres up for every metre forward.",
            "module-1",
        )
        .with_related(&["Intercept", "Coefficient"]),
        GlossaryEntry::new(
            "Intercept",
            "The prediction when every feature is zero.",
            "The starting line before anyone takes a step.",
            "module-1",
        )
        .with_related(&["Slope"]),
        GlossaryEntry::new(
            "Coefficient",
            "A learned weight multiplying one feature in a linear model.",
            "How loud each instrument is in the mix.",
            "module-1",
        )
        .with_related(&["Slope", "Regularization"]),
        GlossaryEntry::new(
            "Residual",
            "The difference between an observed value and the model's prediction.",
            "How far your dart landed from the bullseye.",
            "module-1",
        )
        .with_related(&["Least Squares", "Mean Squared Error"]),
        GlossaryEntry::new(
            "Least Squares",
            "Fitting a model by minimising the sum of squared residuals.",
            "Adjusting a shelf until the total wobble is as small as possible.",
            "module-1",
        )
        .with_related(&["Residual"]),
        GlossaryEntry::new(
            "Loss Function",
            "A function that scores how wrong a model's predictions are.",
            "The scoreboard that tells you how badly you are losing.",
            "module-2",
        )
        .with_related(&["Mean Squared Error", "Mean Absolute Error"]),
        GlossaryEntry::new(
            "Mean Squared Error",
            "The average of squared residuals.",
            "A teacher who takes off extra marks for big mistakes.",
            "module-2",
        )
        .with_related(&["Loss Function", "Residual"]),
        GlossaryEntry::new(
            "Mean Absolute Error",
            "The average of absolute residuals; less sensitive to outliers than MSE.",
            "A teacher who takes off one mark per mistake, whatever its size.",
            "module-2",
        )
        .with_related(&["Loss Function", "Outlier"]),
        GlossaryEntry::new(
            "Outlier",
            "A data point far from the general pattern.",
            "The one guest who shows up in a costume to a formal dinner.",
            "module-2",
        ),
        GlossaryEntry::new(
            "Gradient Descent",
            "An optimisation method that repeatedly steps parameters against the gradient of the loss.",
            "Walking down a foggy hill by always stepping where the ground slopes down.",
            "module-2",
        )
        .with_related(&["Learning Rate", "Loss Function"]),
        GlossaryEntry::new(
            "Learning Rate",
            "The step size used by gradient descent.",
            "How big your strides are on the way down the hill.",
            "module-2",
        )
        .with_related(&["Gradient Descent"]),
        GlossaryEntry::new(
            "Bias",
            "Error from overly simple assumptions that miss the real pattern.",
            "Always aiming a little to the left of the target.",
            "module-3",
        )
        .with_related(&["Variance", "Underfitting"]),
        GlossaryEntry::new(
            "Variance",
            "Error from sensitivity to the particular training sample.",
            "Shots scattered all over the board.",
            "module-3",
        )
        .with_related(&["Bias", "Overfitting"]),
        GlossaryEntry::new(
            "Overfitting",
            "Learning noise in the training data so the model fails on new data.",
            "Memorising the answer sheet instead of learning the subject.",
            "module-3",
        )
        .with_related(&["Variance", "Regularization"]),
        GlossaryEntry::new(
            "Underfitting",
            "A model too simple to capture the pattern in the data.",
            "Summarising a novel as 'stuff happens'.",
            "module-3",
        )
        .with_related(&["Bias"]),
        GlossaryEntry::new(
            "Regularization",
            "Adding a penalty on coefficient size to the loss to discourage complex models.",
            "Training wheels that keep a model from wobbling too far.",
            "module-4",
        )
        .with_related(&["Ridge Regression", "Lasso Regression", "Lambda"]),
        GlossaryEntry::new(
            "Ridge Regression",
            "Linear regression with an L2 penalty on the squared coefficients.",
            "A leash on every coefficient that tightens the further it strays.",
            "module-4",
        )
        .with_related(&["Regularization", "Lasso Regression"]),
        GlossaryEntry::new(
            "Lasso Regression",
            "Linear regression with an L1 penalty that can drive coefficients to zero.",
            "Decluttering: anything not pulling its weight goes in the bin.",
            "module-4",
        )
        .with_related(&["Regularization", "Ridge Regression"]),
        GlossaryEntry::new(
            "Lambda",
            "The hyperparameter that sets the strength of a regularization penalty.",
            "The volume knob on the training wheels.",
            "module-4",
        )
        .with_related(&["Regularization", "Hyperparameter"]),
        GlossaryEntry::new(
            "Hyperparameter",
            "A setting chosen before training rather than learned from data.",
            "The oven temperature, as opposed to the cake itself.",
            "module-4",
        )
        .with_related(&["Cross-Validation"]),
        GlossaryEntry::new(
            "Train-Test Split",
            "Dividing data into a training set for fitting and a test set for final evaluation.",
            "Keeping some exam questions secret until exam day.",
            "module-5",
        )
        .with_related(&["Test Set", "Cross-Validation"]),
        GlossaryEntry::new(
            "Test Set",
            "Held-out data used once to estimate performance on unseen examples.",
            "The sealed envelope only opened at the very end.",
            "module-5",
        )
        .with_related(&["Train-Test Split", "Data Leakage"]),
        GlossaryEntry::new(
            "Cross-Validation",
            "Estimating performance by training on several splits and averaging the scores.",
            "Letting every student take a turn at being the examiner.",
            "module-5",
        )
        .with_related(&["Fold", "Hyperparameter"]),
        GlossaryEntry::new(
            "Fold",
            "One of the k equal parts the data is split into for cross-validation.",
            "One slice of a pizza cut into k pieces.",
            "module-5",
        )
        .with_related(&["Cross-Validation"]),
        GlossaryEntry::new(
            "Prior",
            "A probability distribution describing beliefs before seeing data.",
            "Your guess about the weather before looking outside.",
            "module-6",
        )
        .with_related(&["Posterior", "Bayesian Regression"]),
        GlossaryEntry::new(
            "Posterior",
            "Updated beliefs after combining the prior with observed data.",
            "Your weather guess after glancing out the window.",
            "module-6",
        )
        .with_related(&["Prior"]),
        GlossaryEntry::new(
            "Bayesian Regression",
            "Regression that treats coefficients as distributions updated by data.",
            "A weather forecaster who says '70% chance' instead of 'it will rain'.",
            "module-6",
        )
        .with_related(&["Prior", "Posterior", "Credible Interval"]),
        GlossaryEntry::new(
            "Credible Interval",
            "A range that contains a parameter with a stated posterior probability.",
            "The cone of a hurricane forecast.",
            "module-6",
        )
        .with_related(&["Bayesian Regression"]),
        GlossaryEntry::new(
            "Pipeline",
            "An ordered chain of preprocessing and modelling steps fitted together.",
            "A recipe that must be followed in order.",
            "module-7",
        )
        .with_related(&["Data Leakage", "Feature Scaling"]),
        GlossaryEntry::new(
            "Data Leakage",
            "Information from outside the training data, usually the test set, influencing training.",
            "Seeing the exam answers before the exam.",
            "module-7",
        )
        .with_related(&["Test Set", "Pipeline"]),
        GlossaryEntry::new(
            "Feature Scaling",
            "Transforming features to comparable ranges, e.g. zero mean and unit variance.",
            "Converting everyone's height to the same unit before comparing.",
            "module-7",
        )
        .with_related(&["Pipeline", "Data Leakage"]),
    ]
}
