//! The trivia question bank.

use crate::games::quiz::Question;

/// Builds the standard question list, in quiz order.
pub fn quiz_questions() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            prompt: "Which elephant species is the largest?".to_string(),
            options: vec![
                "Asian Elephant".to_string(),
                "African Bush Elephant".to_string(),
                "African Forest Elephant".to_string(),
                "Woolly Mammoth".to_string(),
            ],
            correct: 1,
            explanation: "The African Bush Elephant is the largest living land animal, with males reaching up to 13 feet at the shoulder.".to_string(),
        },
        Question {
            id: 2,
            prompt: "How long is an elephant's pregnancy?".to_string(),
            options: vec![
                "12 months".to_string(),
                "16 months".to_string(),
                "22 months".to_string(),
                "24 months".to_string(),
            ],
            correct: 2,
            explanation: "Elephants have the longest pregnancy of all mammals, lasting approximately 22 months.".to_string(),
        },
        Question {
            id: 3,
            prompt: "Roughly how many muscles are in an elephant's trunk?".to_string(),
            options: vec![
                "400".to_string(),
                "4,000".to_string(),
                "40,000".to_string(),
                "400,000".to_string(),
            ],
            correct: 2,
            explanation: "The trunk contains over 40,000 muscles and serves as nose, hand, and voice all at once.".to_string(),
        },
        Question {
            id: 4,
            prompt: "Who leads an elephant herd?".to_string(),
            options: vec![
                "The oldest bull".to_string(),
                "The matriarch".to_string(),
                "The strongest calf".to_string(),
                "Leadership rotates daily".to_string(),
            ],
            correct: 1,
            explanation: "Herds are matriarchal: the oldest female guides the family using knowledge built over decades.".to_string(),
        },
        Question {
            id: 5,
            prompt: "How do elephants communicate over several kilometers?".to_string(),
            options: vec![
                "Ultrasonic squeaks".to_string(),
                "Infrasonic rumbles".to_string(),
                "Scent trails only".to_string(),
                "They cannot".to_string(),
            ],
            correct: 1,
            explanation: "Elephants produce rumbles as low as 5 hertz that travel several kilometers, far below human hearing.".to_string(),
        },
    ]
}
