use super::CategoryDef;

/// Phrases observed in real notification templates, grouped per category.
pub const EMAIL_PATTERNS: &[CategoryDef] = &[
    CategoryDef {
        name: "ChatGPT",
        subjects: &[
            "chatgpt",
            "gpt-4",
            "dalle",
            "dall-e",
            "openai",
            "write faster with chatgpt",
            "you + chatgpt",
            "chatgpt images",
            "chatgpt plus",
            "new in chatgpt",
            "openai api",
            "your free chatgpt",
            "hope you cleared your afternoon",
            "introducing",
            "new feature",
            "sora",
            "try this prompt",
            "meet your new",
            "ai can now",
        ],
        body: &[
            "chatgpt can now",
            "try chatgpt",
            "openai team",
            "gpt-4",
            "dall-e",
            "chatgpt plus",
            "openai.com",
            "we've made improvements",
            "new feature in chatgpt",
            "ai assistant",
            "language model",
            "try it now",
            "the openai team",
        ],
        sender: &[
            "openai",
            "chatgpt",
            "noreply@tm.openai",
            "noreply@email.openai",
            "tm.openai",
        ],
    },
    CategoryDef {
        name: "Discord",
        subjects: &[
            "verify email address for discord",
            "verify your email for discord",
            "discord verification",
            "you've been invited to join",
            "new login to your discord",
            "discord nitro",
            "server invite",
            "mentioned you",
            "direct message from",
            "friend request from",
        ],
        body: &[
            "welcome to discord",
            "verify email for discord",
            "join the server",
            "discord.com/verify",
            "discord server",
            "discord nitro",
            "discord.gg/",
            "discord app",
            "your discord account",
            "click here to verify",
        ],
        sender: &[
            "discord",
            "noreply@discord",
        ],
    },
    CategoryDef {
        name: "GitHub",
        subjects: &[
            "[github]",
            "re: [github]",
            "pull request",
            "pr #",
            "issue #",
            "issue opened",
            "issue closed",
            "pushed to",
            "dependabot alert",
            "security alert",
            "github actions",
            "workflow run",
            "review requested",
            "approved your pull request",
            "merged pull request",
            "new release",
            "starred your repository",
            "forked your repository",
            "mentioned you on",
            "assigned to you",
        ],
        body: &[
            "view on github",
            "view it on github",
            "github.com/",
            "pull request #",
            "issue #",
            "pushed new commits",
            "ci passed",
            "ci failed",
            "build passed",
            "build failed",
            "dependabot will",
            "github actions workflow",
            "unsubscribe from this thread",
            "you are receiving this because",
            "mute this conversation",
            "reply to this email directly",
            "merge pull request",
            "closed the issue",
            "requested your review",
        ],
        sender: &[
            "github",
            "noreply@github",
            "notifications@github",
        ],
    },
    CategoryDef {
        name: "LinkedIn",
        subjects: &[
            "new connection",
            "connection request",
            "accepted your invitation",
            "viewed your profile",
            "appeared in",
            "job alert:",
            "is hiring",
            "congratulations on",
            "endorsed you",
            "mentioned you",
            "commented on",
            "posted a job",
            "shared a post",
            "invitation to connect",
            "who viewed your profile",
            "your network",
            "jobs you may be interested in",
        ],
        body: &[
            "linkedin.com/in/",
            "linkedin.com/jobs/",
            "linkedin.com/company/",
            "view profile",
            "connect with",
            "mutual connections",
            "apply on linkedin",
            "see all jobs",
            "unsubscribe from",
            "you received this email",
            "linkedin corporation",
            "degree connection",
            "people you may know",
        ],
        sender: &[
            "linkedin",
            "messages-noreply@linkedin",
            "jobs-noreply@linkedin",
        ],
    },
    CategoryDef {
        name: "Internshala",
        subjects: &[
            "you have been shortlisted",
            "shortlisted for",
            "new internship matching",
            "internshala",
            "resume viewed",
            "application status",
            "virtual interview",
            "new internships for you",
            "internship opportunity",
            "your application for",
            "interview scheduled",
            "training certificate",
        ],
        body: &[
            "internshala.com",
            "apply now on internshala",
            "employer has shortlisted",
            "your internshala profile",
            "resume was viewed by",
            "stipend:",
            "stipend ₹",
            "work from home",
            "duration:",
            "apply by",
            "application deadline",
            "interview details",
        ],
        sender: &[
            "internshala",
            "noreply@internshala",
            "no-reply@internshala",
        ],
    },
    CategoryDef {
        name: "College Events",
        subjects: &[
            "techno cultural",
            "technical fest",
            "cultural fest",
            "fest registration",
            "college fest",
            "annual fest",
            "symposium",
            "workshop registration",
            "event registration",
            "utsav",
            "national level",
            "inter college",
            "intra college",
            "invitation to",
            "you're invited",
        ],
        body: &[
            "fest 20",
            "annual event",
            "register now",
            "last date to register",
            "participation certificate",
            "chief guest",
            "prize pool",
            "prize worth",
            "cultural night",
            "technical event",
            "college campus",
            "event day",
            "spot registration",
            "online registration",
            "team size",
            "entry fee",
        ],
        sender: &[
            "unstop",
            "dare2compete",
            "fest",
            "events@",
            "college",
            "university",
        ],
    },
    CategoryDef {
        name: "Hackathons",
        subjects: &[
            "hackathon",
            "hack20",
            "devfolio",
            "code jam",
            "build challenge",
            "24 hour",
            "48 hour",
            "coding marathon",
            "developer challenge",
            "innovation challenge",
            "your team",
            "submission",
        ],
        body: &[
            "hackathon registration",
            "team formation",
            "prize pool",
            "prizes worth",
            "judging criteria",
            "submission deadline",
            "devfolio.co",
            "project submission",
            "hacker",
            "mentor session",
            "hacking begins",
            "build something",
            "form a team",
        ],
        sender: &[
            "devfolio",
            "hackerearth",
            "mlh",
            "hackathon",
            "hack@",
        ],
    },
    CategoryDef {
        name: "Leetcode",
        subjects: &[
            "leetcode",
            "daily challenge",
            "weekly contest",
            "biweekly contest",
            "problem of the day",
            "your daily coding challenge",
            "your streak",
            "contest reminder",
            "leetcode premium",
        ],
        body: &[
            "leetcode.com",
            "solve today's",
            "daily coding challenge",
            "contest starts",
            "your streak",
            "difficulty: easy",
            "difficulty: medium",
            "difficulty: hard",
            "acceptance rate",
            "submissions",
            "join contest",
            "premium features",
        ],
        sender: &[
            "leetcode",
            "noreply@leetcode",
        ],
    },
    CategoryDef {
        name: "NPTEL",
        subjects: &[
            "nptel",
            "swayam",
            "week content",
            "week released",
            "assignment deadline",
            "noc certificate",
            "exam registration",
            "course content",
            "quiz deadline",
            "enrollment",
        ],
        body: &[
            "nptel.ac.in",
            "swayam.gov.in",
            "week released",
            "assignment due",
            "proctored exam",
            "iit madras",
            "iit bombay",
            "iit kharagpur",
            "iit delhi",
            "iit kanpur",
            "iisc",
            "course certificate",
            "complete the assignments",
            "watch the videos",
        ],
        sender: &[
            "nptel",
            "swayam",
            "noc@",
            "iit",
        ],
    },
    CategoryDef {
        name: "OTP",
        subjects: &[
            "verification code",
            "otp",
            "one time password",
            "security code",
            "login code",
            "authentication code",
            "verify your email",
            "confirm your email",
            "your code is",
            "sign-in code",
        ],
        body: &[
            "your otp is",
            "your code is",
            "verification code is",
            "valid for",
            "expires in",
            "do not share",
            "one time password",
            "enter this code",
            "this code will expire",
            "use this code",
        ],
        sender: &[],
    },
    CategoryDef {
        name: "Exams",
        subjects: &[
            "exam schedule",
            "examination notice",
            "admit card",
            "hall ticket",
            "exam result",
            "datesheet",
            "mid semester exam",
            "end semester exam",
            "practical exam",
            "viva voce",
            "supplementary exam",
            "backlog exam",
        ],
        body: &[
            "examination hall",
            "exam center",
            "exam centre",
            "reporting time",
            "examination branch",
            "controller of examinations",
            "roll number",
            "seat number",
            "exam timing",
            "exam rules",
            "hall ticket",
            "valid id proof",
        ],
        sender: &[
            "exam",
            "controller",
            "registrar",
            "academic",
            "coe@",
        ],
    },
    CategoryDef {
        name: "Online Courses",
        subjects: &[
            "course started",
            "new lecture",
            "new lecture available",
            "course completion",
            "certificate ready",
            "enrolled in",
            "congratulations on completing",
            "continue learning",
            "your course",
            "new course",
        ],
        body: &[
            "continue learning",
            "your progress",
            "course certificate",
            "next lesson",
            "video lecture",
            "quiz due",
            "assignment due",
            "complete your course",
            "download certificate",
            "new section available",
        ],
        sender: &[
            "coursera",
            "udemy",
            "edx",
            "skillshare",
            "udacity",
            "course",
        ],
    },
    CategoryDef {
        name: "Job Alerts",
        subjects: &[
            "job opening",
            "new job",
            "job alert",
            "jobs for you",
            "we're hiring",
            "now hiring",
            "job opportunity",
            "career opportunity",
            "job recommendation",
            "jobs matching",
            "apply now",
        ],
        body: &[
            "apply now",
            "job description",
            "qualifications",
            "requirements",
            "salary:",
            "ctc:",
            "experience required",
            "job location",
            "apply before",
            "application deadline",
            "interview process",
            "we are looking for",
        ],
        sender: &[
            "naukri",
            "indeed",
            "glassdoor",
            "monster",
            "jobs@",
            "careers@",
            "hiring@",
        ],
    },
    CategoryDef {
        name: "Newsletters",
        subjects: &[
            "newsletter",
            "weekly digest",
            "this week in",
            "monthly roundup",
            "daily brief",
            "your weekly",
            "weekly update",
            "top stories",
        ],
        body: &[
            "unsubscribe",
            "view in browser",
            "weekly roundup",
            "top stories",
            "curated for you",
            "you received this email because",
            "manage preferences",
            "email preferences",
            "this week's",
        ],
        sender: &[
            "newsletter",
            "digest",
            "brief",
            "weekly",
            "updates@",
        ],
    },
    CategoryDef {
        name: "Shopping",
        subjects: &[
            "order confirmed",
            "order shipped",
            "out for delivery",
            "delivered",
            "track your order",
            "your order #",
            "order id:",
            "invoice",
            "payment successful",
            "thank you for your order",
        ],
        body: &[
            "track package",
            "delivery date",
            "order total",
            "shipping address",
            "estimated delivery",
            "order details",
            "item(s) ordered",
            "arriving",
            "shipped via",
            "tracking number",
        ],
        sender: &[
            "amazon",
            "flipkart",
            "myntra",
            "orders@",
            "order-update@",
            "shipping@",
        ],
    },
    CategoryDef {
        name: "Finance",
        subjects: &[
            "transaction alert",
            "payment received",
            "payment successful",
            "money sent",
            "money received",
            "bank statement",
            "credit card statement",
            "debit alert",
            "credit alert",
            "upi transaction",
        ],
        body: &[
            "transaction of rs",
            "inr ",
            "₹",
            "debited from",
            "credited to",
            "available balance",
            "transaction id",
            "reference number",
            "upi ref",
            "atm withdrawal",
            "account ending",
            "account number",
        ],
        sender: &[
            "bank",
            "hdfc",
            "icici",
            "sbi",
            "axis",
            "kotak",
            "paytm",
            "phonepe",
            "gpay",
            "cred",
        ],
    },
    CategoryDef {
        name: "Meetings",
        subjects: &[
            "meeting invitation",
            "zoom meeting",
            "google meet",
            "teams meeting",
            "calendar invite",
            "scheduled with you",
            "meeting reminder",
            "join the meeting",
            "interview scheduled",
            "video call",
        ],
        body: &[
            "join zoom meeting",
            "meet.google.com",
            "teams.microsoft.com",
            "meeting id:",
            "passcode:",
            "meeting password",
            "calendar event",
            "accept | tentative | decline",
            "add to calendar",
            "when:",
            "where:",
            "join url",
        ],
        sender: &[
            "calendar",
            "zoom",
            "meet",
            "teams",
            "webex",
            "calendly",
        ],
    },
    CategoryDef {
        name: "Promotions",
        subjects: &[
            "% off",
            "sale",
            "offer",
            "discount",
            "deal",
            "save ₹",
            "limited time",
            "exclusive",
            "promo",
            "coupon",
            "flash sale",
            "hurry",
            "only today",
            "last chance",
        ],
        body: &[
            "shop now",
            "buy now",
            "use code",
            "promo code",
            "limited offer",
            "ends soon",
            "ends today",
            "hurry",
            "don't miss",
            "grab now",
            "% discount",
            "limited stock",
        ],
        sender: &[],
    },
    CategoryDef {
        name: "Google",
        subjects: &[
            "security alert",
            "new sign-in",
            "new device",
            "google account",
            "critical security alert",
            "suspicious activity",
            "review your security",
            "recovery information",
            "verify it's you",
        ],
        body: &[
            "google.com/accounts",
            "myaccount.google.com",
            "someone might have",
            "new device signed in",
            "new sign-in",
            "we detected",
            "secure your account",
            "activity on your account",
            "review this activity",
            "wasn't you",
        ],
        sender: &[
            "google",
            "accounts.google",
            "security-noreply@google",
            "no-reply@google",
        ],
    },
    CategoryDef {
        name: "Social Media",
        subjects: &[
            "tagged you",
            "mentioned you",
            "liked your",
            "commented on",
            "friend request",
            "follow request",
            "new follower",
            "shared your",
            "posted in",
        ],
        body: &[
            "tagged you in",
            "mentioned you in",
            "liked your post",
            "commented on your",
            "reply to your",
            "see the post",
            "view on facebook",
            "view on instagram",
        ],
        sender: &[
            "facebook",
            "instagram",
            "twitter",
            "tiktok",
            "pinterest",
        ],
    },
    CategoryDef {
        name: "Food Delivery",
        subjects: &[
            "order placed",
            "order confirmed",
            "on the way",
            "arriving soon",
            "delivered",
            "your order from",
            "order ready",
            "food is ready",
        ],
        body: &[
            "your order is",
            "delivery partner",
            "estimated time",
            "track order",
            "delivery address",
            "order total",
            "payment:",
            "items ordered",
            "restaurant",
            "arriving in",
            "out for delivery",
        ],
        sender: &[
            "swiggy",
            "zomato",
            "dominos",
            "ubereats",
            "doordash",
        ],
    },
];
