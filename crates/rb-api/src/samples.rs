//! Showcase posts listed under the user feed on `/browsepost`.

use rb_core::models::SamplePost;

pub const SAMPLE_POSTS: &[SamplePost] = &[
    SamplePost {
        title: "The Future of AI",
        tags: "AI, Technology",
        content: "AI is changing the world rapidly. From automation to creativity...",
        publish_date: "2025-05-11",
    },
    SamplePost {
        title: "Exploring Nature",
        tags: "Travel, Nature",
        content: "Wandering through the lush green valleys was a life-changing experience...",
        publish_date: "2025-05-10",
    },
    SamplePost {
        title: "Learning Web Development",
        tags: "Coding, JavaScript",
        content: "JavaScript is the backbone of interactive web experiences...",
        publish_date: "2025-05-09",
    },
    SamplePost {
        title: "Mental Health Matters",
        tags: "Health, Awareness",
        content: "Taking care of mental health is just as important as physical fitness...",
        publish_date: "2025-05-08",
    },
    SamplePost {
        title: "Gadget Reviews 2025",
        tags: "Tech, Reviews",
        content: "Here's what's new and trending in the gadget world this year...",
        publish_date: "2025-05-07",
    },
    SamplePost {
        title: "Cooking with Love",
        tags: "Food, Recipes",
        content: "Today we're exploring simple but delicious homemade recipes...",
        publish_date: "2025-05-06",
    },
    SamplePost {
        title: "Fitness on a Budget",
        tags: "Fitness, Lifestyle",
        content: "No gym? No problem. You can stay fit with these basic routines...",
        publish_date: "2025-05-05",
    },
    SamplePost {
        title: "Books That Changed My Life",
        tags: "Books, Inspiration",
        content: "Some books leave an unforgettable mark on your soul. Here's my list...",
        publish_date: "2025-05-04",
    },
    SamplePost {
        title: "Minimalist Living",
        tags: "Lifestyle, Simplicity",
        content: "Decluttering your space can declutter your mind. Here's how I did it...",
        publish_date: "2025-05-03",
    },
    SamplePost {
        title: "Student Life Tips",
        tags: "Education, Motivation",
        content: "Balancing studies and social life can be tough, but here's what works...",
        publish_date: "2025-05-02",
    },
];
