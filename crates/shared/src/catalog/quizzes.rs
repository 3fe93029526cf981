use regresslab_domain::{ModuleId, Quiz, QuizOption, QuizQuestion};

fn q(question: &str, options: &[(&str, &str)], correct: &str, explanation: &str) -> QuizQuestion {
    QuizQuestion {
        question: question.to_string(),
        options: options
            .iter()
            .map(|(id, text)| QuizOption::new(*id, *text))
            .collect(),
        correct: correct.to_string(),
        explanation: explanation.to_string(),
    }
}

fn quiz(module: &str, questions: Vec<QuizQuestion>) -> Quiz {
    Quiz {
        module: ModuleId::new(module),
        questions,
    }
}

pub(super) fn all() -> Vec<Quiz> {
    vec![
        quiz(
            "module-1",
            vec![
                q(
                    "What kind of value does a regression model predict?",
                    &[
                        ("a", "A category such as 'spam' or 'not spam'"),
                        ("b", "A continuous number"),
                        ("c", "A cluster assignment"),
                        ("d", "A ranking of items"),
                    ],
                    "b",
                    "Regression predicts numbers on a continuous scale, like prices or temperatures.",
                ),
                q(
                    "In y = w * x + b, what does w describe?",
                    &[
                        ("a", "Where the line crosses the y-axis"),
                        ("b", "The average of y"),
                        ("c", "How much y changes per unit of x"),
                        ("d", "The number of data points"),
                    ],
                    "c",
                    "w is the slope: the change in y for a one-unit change in x.",
                ),
                q(
                    "A point sits at y = 10 and the line predicts 7. What is its residual?",
                    &[("a", "3"), ("b", "-3"), ("c", "17"), ("d", "0.7")],
                    "a",
                    "Residual = observed - predicted = 10 - 7 = 3.",
                ),
                q(
                    "What does ordinary least squares minimise?",
                    &[
                        ("a", "The largest residual"),
                        ("b", "The sum of absolute residuals"),
                        ("c", "The number of points above the line"),
                        ("d", "The sum of squared residuals"),
                    ],
                    "d",
                    "Least squares picks the line with the smallest sum of squared residuals.",
                ),
                q(
                    "Why square the residuals instead of adding them directly?",
                    &[
                        ("a", "Positive and negative misses would cancel out"),
                        ("b", "Squaring makes the numbers smaller"),
                        ("c", "It removes outliers"),
                        ("d", "It makes the line pass through the origin"),
                    ],
                    "a",
                    "Raw residuals cancel each other; squaring keeps every miss positive and punishes big ones more.",
                ),
            ],
        ),
        quiz(
            "module-2",
            vec![
                q(
                    "Which loss is least sensitive to a few extreme outliers?",
                    &[
                        ("a", "Mean squared error"),
                        ("b", "Mean absolute error"),
                        ("c", "Root mean squared error"),
                        ("d", "Sum of squared errors"),
                    ],
                    "b",
                    "Absolute error grows linearly with the miss, so outliers weigh less than under squared error.",
                ),
                q(
                    "Gradient descent updates the parameters by moving...",
                    &[
                        ("a", "In the direction of the gradient"),
                        ("b", "Randomly"),
                        ("c", "Against the gradient"),
                        ("d", "Toward zero"),
                    ],
                    "c",
                    "The gradient points uphill, so stepping against it lowers the loss.",
                ),
                q(
                    "The loss jumps up and down and grows each epoch. What is the likely cause?",
                    &[
                        ("a", "Learning rate too high"),
                        ("b", "Learning rate too low"),
                        ("c", "Too few features"),
                        ("d", "The data is sorted"),
                    ],
                    "a",
                    "Oversized steps overshoot the minimum and can make the loss diverge.",
                ),
                q(
                    "What happens with a very small learning rate?",
                    &[
                        ("a", "Training diverges"),
                        ("b", "Training converges slowly"),
                        ("c", "The model overfits immediately"),
                        ("d", "The gradient becomes zero"),
                    ],
                    "b",
                    "Tiny steps still head downhill, just very slowly.",
                ),
            ],
        ),
        quiz(
            "module-3",
            vec![
                q(
                    "Training error 2, test error 25. What is going on?",
                    &[
                        ("a", "Underfitting"),
                        ("b", "Overfitting"),
                        ("c", "A good fit"),
                        ("d", "Data leakage for sure"),
                    ],
                    "b",
                    "A large gap between training and test error is the signature of high variance.",
                ),
                q(
                    "Training error 30, test error 31. What is going on?",
                    &[
                        ("a", "Underfitting"),
                        ("b", "Overfitting"),
                        ("c", "A good fit"),
                        ("d", "Too much regularization is impossible here"),
                    ],
                    "a",
                    "Both errors are high and close: the model is too simple (high bias).",
                ),
                q(
                    "Which change usually reduces variance?",
                    &[
                        ("a", "Adding polynomial features"),
                        ("b", "Training longer on the same data"),
                        ("c", "Collecting more training data"),
                        ("d", "Removing the test set"),
                    ],
                    "c",
                    "More data makes it harder for a flexible model to memorise noise.",
                ),
                q(
                    "Which model should you prefer?",
                    &[
                        ("a", "Lowest training error"),
                        ("b", "Lowest test error"),
                        ("c", "Most parameters"),
                        ("d", "Fewest parameters"),
                    ],
                    "b",
                    "Test error estimates performance on new data, which is what matters.",
                ),
                q(
                    "Increasing model flexibility typically...",
                    &[
                        ("a", "Raises bias and lowers variance"),
                        ("b", "Lowers both bias and variance"),
                        ("c", "Lowers bias and raises variance"),
                        ("d", "Has no effect on either"),
                    ],
                    "c",
                    "That is the bias-variance trade-off.",
                ),
            ],
        ),
        quiz(
            "module-4",
            vec![
                q(
                    "Which penalty can set coefficients exactly to zero?",
                    &[
                        ("a", "L2 (ridge)"),
                        ("b", "L1 (lasso)"),
                        ("c", "Both equally"),
                        ("d", "Neither"),
                    ],
                    "b",
                    "The L1 penalty's corners push small coefficients all the way to zero.",
                ),
                q(
                    "Your model overfits. How should you change lambda?",
                    &[
                        ("a", "Increase it"),
                        ("b", "Decrease it"),
                        ("c", "Set it to zero"),
                        ("d", "Make it negative"),
                    ],
                    "a",
                    "A stronger penalty shrinks coefficients and reduces variance.",
                ),
                q(
                    "What happens when lambda is enormous?",
                    &[
                        ("a", "The model overfits"),
                        ("b", "Coefficients shrink toward zero and the model underfits"),
                        ("c", "Nothing changes"),
                        ("d", "Training error drops to zero"),
                    ],
                    "b",
                    "With a huge penalty the cheapest model predicts nearly a constant.",
                ),
                q(
                    "How is a good lambda usually chosen?",
                    &[
                        ("a", "By trying values with cross-validation"),
                        ("b", "By minimising training error"),
                        ("c", "Always 1.0"),
                        ("d", "By looking at the test set repeatedly"),
                    ],
                    "a",
                    "Lambda is a hyperparameter; cross-validation compares candidates without touching the test set.",
                ),
            ],
        ),
        quiz(
            "module-5",
            vec![
                q(
                    "You have 1,000,000 rows. Which split is most sensible?",
                    &[("a", "50/50"), ("b", "70/30"), ("c", "80/20"), ("d", "95/5")],
                    "d",
                    "Five percent is already 50,000 test rows, plenty for a stable estimate.",
                ),
                q(
                    "Why should the test set be used only once?",
                    &[
                        ("a", "It is expensive to load"),
                        ("b", "Repeated tuning against it makes its score optimistic"),
                        ("c", "Libraries forbid it"),
                        ("d", "It has no labels"),
                    ],
                    "b",
                    "Every decision made by peeking at the test set leaks information into the model.",
                ),
                q(
                    "In 5-fold cross-validation, how many models are trained?",
                    &[("a", "1"), ("b", "4"), ("c", "5"), ("d", "10")],
                    "c",
                    "One model per fold, each leaving that fold out for validation.",
                ),
                q(
                    "Your model takes 6 hours to train. Which k is practical?",
                    &[
                        ("a", "Leave-one-out"),
                        ("b", "k = 20"),
                        ("c", "k = 3"),
                        ("d", "k = 100"),
                    ],
                    "c",
                    "Few folds keep the number of expensive training runs manageable.",
                ),
                q(
                    "Cross-validation is mainly used to...",
                    &[
                        ("a", "Replace the test set entirely"),
                        ("b", "Compare models and tune hyperparameters"),
                        ("c", "Speed up training"),
                        ("d", "Clean missing values"),
                    ],
                    "b",
                    "It gives a more reliable validation score for model selection.",
                ),
            ],
        ),
        quiz(
            "module-6",
            vec![
                q(
                    "What does a prior represent?",
                    &[
                        ("a", "The data's noise level"),
                        ("b", "Beliefs about parameters before seeing data"),
                        ("c", "The final prediction"),
                        ("d", "The test error"),
                    ],
                    "b",
                    "The prior encodes what you know before the data arrives.",
                ),
                q(
                    "With only three data points, the posterior will be...",
                    &[
                        ("a", "Close to the prior"),
                        ("b", "Identical to the maximum-likelihood fit"),
                        ("c", "Undefined"),
                        ("d", "Always zero"),
                    ],
                    "a",
                    "Little data barely moves beliefs away from the prior.",
                ),
                q(
                    "A Gaussian prior on the coefficients centred at zero behaves like...",
                    &[
                        ("a", "Lasso"),
                        ("b", "Ridge"),
                        ("c", "No regularization"),
                        ("d", "Dropout"),
                    ],
                    "b",
                    "The MAP estimate under a zero-mean Gaussian prior is ridge regression.",
                ),
                q(
                    "Where are Bayesian credible intervals widest?",
                    &[
                        ("a", "Where data is dense"),
                        ("b", "At the mean of x"),
                        ("c", "Where data is sparse"),
                        ("d", "They are the same width everywhere"),
                    ],
                    "c",
                    "Uncertainty grows where few observations constrain the line.",
                ),
            ],
        ),
        quiz(
            "module-7",
            vec![
                q(
                    "What should be the first step of a modelling pipeline?",
                    &[
                        ("a", "Scale all features"),
                        ("b", "Split into train and test"),
                        ("c", "Tune hyperparameters"),
                        ("d", "Evaluate the model"),
                    ],
                    "b",
                    "Splitting first keeps every later step blind to the test data.",
                ),
                q(
                    "Which of these leaks test information?",
                    &[
                        ("a", "Fitting a scaler on the training set"),
                        ("b", "Imputing missing values with the full-dataset mean"),
                        ("c", "Cross-validating on training data"),
                        ("d", "Evaluating once on the test set"),
                    ],
                    "b",
                    "The full-dataset mean includes test rows, so the model gets a peek.",
                ),
                q(
                    "A model scores 99% offline but fails in production. A likely reason?",
                    &[
                        ("a", "Data leakage"),
                        ("b", "Too small a learning rate"),
                        ("c", "Too few folds"),
                        ("d", "The prior was too wide"),
                    ],
                    "a",
                    "Suspiciously good offline scores are a classic leakage symptom.",
                ),
                q(
                    "How should a scaler be applied to the test set?",
                    &[
                        ("a", "Fit a new scaler on the test set"),
                        ("b", "Use the scaler fitted on the training set"),
                        ("c", "Skip scaling the test set"),
                        ("d", "Fit on train and test combined"),
                    ],
                    "b",
                    "Reuse the training statistics so the test set stays unseen.",
                ),
            ],
        ),
    ]
}
