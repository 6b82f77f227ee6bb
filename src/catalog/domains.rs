/// Sender-domain fragments mapped to categories. Declaration order decides
/// which entry wins when several fragments occur in one domain.
pub const DOMAIN_MAPPINGS: &[(&str, &str)] = &[
    // Coding Platforms
    ("leetcode", "Leetcode"),
    ("hackerrank", "Coding Practice"),
    ("codechef", "Coding Practice"),
    ("codeforces", "Coding Practice"),
    ("geeksforgeeks", "Coding Practice"),
    ("interviewbit", "Coding Practice"),
    ("topcoder", "Coding Practice"),
    ("atcoder", "Coding Practice"),
    ("exercism", "Coding Practice"),
    ("codewars", "Coding Practice"),

    // AI Services
    ("openai", "ChatGPT"),
    ("chatgpt", "ChatGPT"),
    ("anthropic", "AI Services"),
    ("claude", "AI Services"),
    ("bard", "AI Services"),
    ("gemini", "AI Services"),
    ("midjourney", "AI Services"),
    ("stability", "AI Services"),
    ("huggingface", "AI Services"),
    ("perplexity", "AI Services"),

    // Chat & Communication
    ("discord", "Discord"),
    ("discordapp", "Discord"),
    ("slack", "Slack"),
    ("telegram", "Telegram"),
    ("whatsapp", "WhatsApp"),
    ("signal", "Messaging"),
    ("viber", "Messaging"),
    ("teams.microsoft", "Microsoft Teams"),

    // Learning Platforms
    ("nptel", "NPTEL"),
    ("swayam", "NPTEL"),
    ("coursera", "Online Courses"),
    ("udemy", "Online Courses"),
    ("edx", "Online Courses"),
    ("skillshare", "Online Courses"),
    ("pluralsight", "Online Courses"),
    ("udacity", "Online Courses"),
    ("khanacademy", "Online Courses"),
    ("codecademy", "Online Courses"),
    ("datacamp", "Online Courses"),
    ("brillant", "Online Courses"),

    // Jobs & Internships
    ("internshala", "Internshala"),
    ("naukri", "Job Alerts"),
    ("indeed", "Job Alerts"),
    ("glassdoor", "Job Alerts"),
    ("monster", "Job Alerts"),
    ("ziprecruiter", "Job Alerts"),
    ("dice", "Job Alerts"),
    ("simplyhired", "Job Alerts"),
    ("wellfound", "Job Alerts"),
    ("angel.co", "Job Alerts"),
    ("hired", "Job Alerts"),
    ("triplebyte", "Job Alerts"),
    ("turing", "Job Alerts"),
    ("toptal", "Job Alerts"),
    ("remoteok", "Job Alerts"),
    ("weworkremotely", "Job Alerts"),

    // College Events & Hackathons
    ("unstop", "College Events"),
    ("dare2compete", "College Events"),
    ("devfolio", "Hackathons"),
    ("hackerearth", "Hackathons"),
    ("mlh", "Hackathons"),
    ("hackclub", "Hackathons"),
    ("eventbrite", "Events"),
    ("meetup", "Events"),
    ("luma", "Events"),

    // Developer Tools
    ("github", "GitHub"),
    ("gitlab", "GitLab"),
    ("bitbucket", "Version Control"),
    ("stackoverflow", "Stack Overflow"),
    ("stackexchange", "Stack Overflow"),
    ("docker", "DevOps"),
    ("digitalocean", "Cloud"),
    ("aws.amazon", "AWS"),
    ("azure", "Azure"),
    ("heroku", "Cloud"),
    ("vercel", "Cloud"),
    ("netlify", "Cloud"),
    ("railway", "Cloud"),
    ("render", "Cloud"),
    ("firebase", "Firebase"),

    // Professional Networks
    ("linkedin", "LinkedIn"),

    // Academic
    ("ieee", "IEEE"),
    ("acm", "Academic"),
    ("springer", "Academic"),
    ("researchgate", "Academic"),
    ("academia.edu", "Academic"),
    ("arxiv", "Academic"),
    ("sciencedirect", "Academic"),
    ("scholar.google", "Academic"),

    // Social Media
    ("facebook", "Social Media"),
    ("facebookmail", "Social Media"),
    ("instagram", "Social Media"),
    ("twitter", "Social Media"),
    ("x.com", "Social Media"),
    ("tiktok", "Social Media"),
    ("pinterest", "Social Media"),
    ("reddit", "Reddit"),
    ("quora", "Quora"),
    ("medium", "Medium"),
    ("substack", "Newsletters"),
    ("beehiiv", "Newsletters"),
    ("buttondown", "Newsletters"),
    ("hashnode", "Newsletters"),
    ("devto", "Newsletters"),

    // Shopping & E-commerce
    ("amazon", "Shopping"),
    ("flipkart", "Shopping"),
    ("myntra", "Shopping"),
    ("ajio", "Shopping"),
    ("snapdeal", "Shopping"),
    ("meesho", "Shopping"),
    ("nykaa", "Shopping"),
    ("alibaba", "Shopping"),
    ("aliexpress", "Shopping"),
    ("ebay", "Shopping"),

    // Food Delivery
    ("swiggy", "Food Delivery"),
    ("zomato", "Food Delivery"),
    ("dominos", "Food Delivery"),
    ("mcdonalds", "Food Delivery"),
    ("ubereats", "Food Delivery"),
    ("doordash", "Food Delivery"),

    // Travel
    ("uber", "Travel"),
    ("ola", "Travel"),
    ("rapido", "Travel"),
    ("makemytrip", "Travel"),
    ("goibibo", "Travel"),
    ("booking", "Travel"),
    ("airbnb", "Travel"),
    ("cleartrip", "Travel"),
    ("irctc", "Travel"),

    // Finance
    ("paypal", "Finance"),
    ("razorpay", "Finance"),
    ("paytm", "Finance"),
    ("phonepe", "Finance"),
    ("gpay", "Finance"),
    ("stripe", "Finance"),
    ("wise", "Finance"),
    ("revolut", "Finance"),
    ("cred", "Finance"),
    ("icici", "Finance"),
    ("hdfc", "Finance"),
    ("sbi", "Finance"),
    ("axis", "Finance"),
    ("kotak", "Finance"),

    // Gaming
    ("steam", "Gaming"),
    ("epicgames", "Gaming"),
    ("playstation", "Gaming"),
    ("xbox", "Gaming"),
    ("twitch", "Gaming"),
    ("riotgames", "Gaming"),
    ("ea.com", "Gaming"),

    // Health & Wellness
    ("practo", "Health"),
    ("healthifyme", "Health"),
    ("cult.fit", "Health"),
    ("headspace", "Wellness"),
    ("calm", "Wellness"),
    ("fitbit", "Health"),
    ("strava", "Health"),

    // Google Services
    ("google", "Google"),
    ("youtube", "YouTube"),
    ("accounts.google", "Google"),

    // Microsoft
    ("microsoft", "Microsoft"),
    ("outlook", "Microsoft"),
    ("office365", "Microsoft"),
];
