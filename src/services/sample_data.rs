use crate::models::activity::Activity;

struct SampleActivity {
    emoji: &'static str,
    title: &'static str,
    description: &'static str,
    location: &'static str,
    distance: &'static str,
}

const SAMPLE_ACTIVITIES: [SampleActivity; 5] = [
    SampleActivity {
        emoji: "🚋",
        title: "**Muni Heritage Weekend - Sunday 10am-4pm**",
        description: "A special event where families can ride vintage transit vehicles that are rarely seen on San Francisco streets, including vintage buses and the Blackpool Boat Tram. All rides on these special streetcars are FREE all weekend.",
        location: "San Francisco Railway Museum",
        distance: "0.5 miles",
    },
    SampleActivity {
        emoji: "🇬🇷",
        title: "**Greek Food Festival - Sunday 11am-8pm**",
        description: "The annual Greek Food Festival features delicious traditional food like Spanakopita and Moussaka, plus desserts and Greek wine. Visitors can enjoy classic Greek music, watch award-winning folk dance groups perform, and browse unique gifts from local vendors.",
        location: "Mission District",
        distance: "1.2 miles",
    },
    SampleActivity {
        emoji: "🎨",
        title: "**Sunday Funnies Exhibit - Sunday 10am-5pm**",
        description: "The Cartoon Art Museum's 40th anniversary showcase features classic comic strips from the dawn of the comics medium to the present day, including works from legendary cartoonists like Charles M. Schulz (Peanuts) and contemporary classics like Phoebe and Her Unicorn.",
        location: "Cartoon Art Museum",
        distance: "2 miles",
    },
    SampleActivity {
        emoji: "🌳",
        title: "**Lindy in the Park Dance Party - Sunday 11am-2pm**",
        description: "A weekly free swing dance event near the de Young Museum when the streets of Golden Gate Park are closed to traffic. Get ready to swing in Golden Gate Park every sunny Sunday at this family-friendly dance gathering.",
        location: "Golden Gate Park",
        distance: "3.5 miles",
    },
    SampleActivity {
        emoji: "🦋",
        title: "**Butterfly Garden Workshop - Sunday 2pm-4pm**",
        description: "Learn about local butterfly species and help plant native flowers that attract butterflies to the garden. This hands-on workshop is perfect for families and includes take-home seed packets for creating your own butterfly garden at home.",
        location: "Children's Garden Center",
        distance: "2.8 miles",
    },
];

/// Fixed recommendations served when the model is disabled or not configured.
pub fn sample_activities() -> Vec<Activity> {
    SAMPLE_ACTIVITIES
        .iter()
        .enumerate()
        .map(|(index, sample)| Activity {
            id: Some(index as u32 + 1),
            emoji: sample.emoji.to_string(),
            title: sample.title.to_string(),
            description: sample.description.to_string(),
            location: sample.location.to_string(),
            distance: sample.distance.to_string(),
        })
        .collect()
}
