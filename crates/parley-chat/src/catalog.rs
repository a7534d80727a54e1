//! Built-in category table.
//!
//! Used whenever the config file declares no `[[categories]]` of its own.
//! Declaration order is matching order: an utterance that hits patterns in
//! several categories lands in the earliest one.

use parley_core::config::CategoryConfig;

pub const GREETINGS: &str = "greetings";
pub const HOW_ARE_YOU: &str = "how_are_you";
pub const GOODBYE: &str = "goodbye";
pub const NAME: &str = "name";
pub const AGE: &str = "age";
pub const HELP: &str = "help";
pub const WEATHER: &str = "weather";
pub const TIME: &str = "time";
pub const COMPLIMENTS: &str = "compliments";
pub const DEFAULT: &str = "default";

/// The built-in categories, fallback last.
pub fn builtin() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig::new(
            GREETINGS,
            &[
                r"\b(hello|hi|hey|greetings|good morning|good afternoon|good evening)\b",
                r"\b(what's up|whats up|sup)\b",
            ],
            &[
                "Hi! How can I help you today?",
                "Hello! Nice to meet you!",
                "Hey there! What's on your mind?",
                "Greetings! How are you doing?",
                "Hi! I'm here to chat with you!",
            ],
        ),
        CategoryConfig::new(
            HOW_ARE_YOU,
            &[
                r"\b(how are you|how do you do|how's it going|hows it going)\b",
                r"\b(are you okay|are you well|how are things)\b",
            ],
            &[
                "I'm fine, thanks! How about you?",
                "I'm doing great! Thanks for asking!",
                "I'm wonderful! How are you today?",
                "All good here! How can I assist you?",
                "I'm excellent! What brings you here?",
            ],
        ),
        CategoryConfig::new(
            GOODBYE,
            &[
                r"\b(bye|goodbye|see you|farewell|take care)\b",
                r"\b(gotta go|have to go|talk later|catch you later)\b",
            ],
            &[
                "Goodbye! Have a great day!",
                "See you later! Take care!",
                "Bye! It was nice chatting with you!",
                "Farewell! Come back anytime!",
                "Take care! Hope to see you again soon!",
            ],
        ),
        CategoryConfig::new(
            NAME,
            &[
                r"\b(what is your name|what's your name|whats your name)\b",
                r"\b(who are you|tell me about yourself)\b",
            ],
            &[
                "I'm {name}, your friendly chatbot!",
                "My name is {name}. I'm here to chat!",
                "I'm {name}, a simple rule-based chatbot!",
                "You can call me {name}. Nice to meet you!",
            ],
        ),
        CategoryConfig::new(
            AGE,
            &[
                r"\b(how old are you|what is your age|whats your age)\b",
                r"\b(when were you born|your birthday)\b",
            ],
            &[
                "I'm timeless! I exist in the digital realm.",
                "Age is just a number for AI like me!",
                "I was born when this program started running!",
                "I don't age like humans do. I'm always young at heart!",
            ],
        ),
        CategoryConfig::new(
            HELP,
            &[
                r"\b(help|assist|support|what can you do)\b",
                r"\b(commands|options|features)\b",
            ],
            &[
                "I can chat with you! Try saying hello, asking how I am, or saying goodbye.",
                "I'm a simple chatbot. I can respond to greetings, questions about myself, and farewells!",
                "You can talk to me about basic things. I understand greetings, questions, and goodbyes!",
                "I'm here to have a friendly conversation with you!",
            ],
        ),
        CategoryConfig::new(
            WEATHER,
            &[
                r"\b(weather|temperature|rain|sunny|cloudy)\b",
                r"\b(hot|cold|warm|cool outside)\b",
            ],
            &[
                "I wish I could check the weather for you, but I don't have access to weather data!",
                "I can't see outside, but I hope it's nice weather where you are!",
                "Weather talk is great! Unfortunately, I can't provide weather updates.",
                "I'd love to chat about weather, but I don't have real-time weather info!",
            ],
        ),
        CategoryConfig::new(
            TIME,
            &[
                r"\b(what time|current time|time is it)\b",
                r"\b(date|today|day)\b",
            ],
            &[
                "The current time is {time}",
                "Today is {date}",
                "Right now it's {datetime}",
            ],
        ),
        CategoryConfig::new(
            COMPLIMENTS,
            &[
                r"\b(you are nice|you're nice|youre nice|good job|well done)\b",
                r"\b(thank you|thanks|appreciate)\b",
            ],
            &[
                "Thank you! That's very kind of you to say!",
                "You're welcome! I'm glad I could help!",
                "Thanks! I appreciate your kind words!",
                "That means a lot to me! Thank you!",
                "You're too kind! Happy to chat with you!",
            ],
        ),
        CategoryConfig::new(
            DEFAULT,
            &[],
            &[
                "I'm not sure I understand. Can you try rephrasing that?",
                "That's interesting! Tell me more.",
                "I'm still learning. Could you ask me something else?",
                "Hmm, I don't have a good response for that. What else would you like to talk about?",
                "I'm a simple chatbot, so I might not understand everything. Try asking me about myself!",
                "Can you try asking me something different? I'm better with greetings and simple questions!",
            ],
        ),
    ]
}
