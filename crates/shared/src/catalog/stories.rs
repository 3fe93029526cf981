use regresslab_domain::{ModuleId, Story, StoryId, StorySection};

pub(super) fn all() -> Vec<Story> {
    vec![
        Story {
            id: StoryId::new("the-perfect-model"),
            title: "The Perfect Model".into(),
            subtitle: "A cautionary tale about memorising the past".into(),
            module: Some(ModuleId::new("module-3")),
            sections: vec![
                StorySection::narrative(
                    "Maya had spent three weeks on the house price model. On Friday \
                     afternoon the training error finally hit 0.2, and she sent a \
                     screenshot to the whole team.",
                ),
                StorySection::dialogue(
                    "Raj",
                    "Nice. What does it score on the houses that sold last month?",
                ),
                StorySection::narrative(
                    "She ran it on the new listings. The error came back at 41. The \
                     model had learned the quirks of every house in the training set, \
                     down to the colour of the front door.",
                ),
                StorySection::lesson(
                    "Overfitting",
                    "A model that fits its training data too closely memorises noise. \
                     The gap between training error and test error is the warning sign.",
                ),
                StorySection::dialogue(
                    "Maya",
                    "So the model wasn't perfect. It was a very expensive photocopier.",
                ),
                StorySection::revelation(
                    "Low training error is not the goal. Low error on data the model has \
                     never seen is.",
                ),
            ],
        },
        Story {
            id: StoryId::new("the-leaky-pipeline"),
            title: "The Leaky Pipeline".into(),
            subtitle: "How a 99% model failed on its first day".into(),
            module: Some(ModuleId::new("module-7")),
            sections: vec![
                StorySection::narrative(
                    "The churn model scored 99% in every offline test. Leadership \
                     approved the launch before lunch. By Monday it was doing worse than \
                     guessing.",
                ),
                StorySection::dialogue(
                    "Leo",
                    "I scaled the features first, then split. Same as always.",
                ),
                StorySection::dialogue(
                    "Priya",
                    "Then the scaler saw the test rows. Their mean and spread went \
                     straight into your training features.",
                ),
                StorySection::lesson(
                    "Data leakage",
                    "Any statistic computed on the full dataset carries test information \
                     into training. Split first, then fit every transformation on the \
                     training set alone.",
                ),
                StorySection::revelation(
                    "A score that looks too good to be true usually is. Check the pipeline \
                     order before you celebrate.",
                ),
            ],
        },
        Story {
            id: StoryId::new("the-forecasters-prior"),
            title: "The Forecaster's Prior".into(),
            subtitle: "Three rainy days and a lot of confidence".into(),
            module: Some(ModuleId::new("module-6")),
            sections: vec![
                StorySection::narrative(
                    "A new intern at the weather office saw three days of heavy rain in \
                     July and predicted a monsoon summer.",
                ),
                StorySection::dialogue(
                    "Dr. Okafor",
                    "Thirty years of Julys say it rains four days a month. Three days of \
                     data shouldn't overturn thirty years.",
                ),
                StorySection::lesson(
                    "Priors and posteriors",
                    "Bayesian regression starts from a prior belief and updates it with \
                     data. With few observations the posterior stays near the prior; as \
                     data piles up, the data takes over.",
                ),
                StorySection::revelation(
                    "Confidence should grow with evidence. A prior is how you remember \
                     what you already know.",
                ),
            ],
        },
    ]
}
