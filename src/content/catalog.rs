//! The compiled-in 30-day LinkedIn campaign for Axeclusive.

use super::models::{CalendarWeek, PageMetadata, Post, PostingGuidelines, TargetAudience};
use super::store::ContentStore;
use crate::error::ContentError;

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Campaign day 1 is a Monday.
fn weekday_for(day: u32) -> &'static str {
    WEEKDAYS[((day.max(1) - 1) % 7) as usize]
}

/// Raw post row: (id/day, time, category, caption, image idea, hashtags, cta).
type PostRow = (
    u32,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
    &'static str,
);

const POSTS: &[PostRow] = &[
    (
        1,
        "9:00 AM",
        "Introduction",
        "Looking for a team building experience your people will actually talk about on Monday morning?\n\nMeet Axeclusive: axe throwing, a splatter paint room, and virtual reality gaming under one roof, built for corporate groups of 10 to 100+.\n\nNo trust falls. No awkward icebreakers. Just real fun that brings teams closer.",
        "Wide shot of a corporate group cheering as a colleague lands a bullseye, company logo banner in the background.",
        &["#TeamBuilding", "#CorporateEvents", "#Axeclusive", "#EmployeeEngagement"],
        "Plan your next team outing: message us for corporate packages.",
    ),
    (
        2,
        "8:30 AM",
        "Educational - Team Building",
        "Why do shared challenges build stronger teams than another lunch-and-learn?\n\nWhen colleagues try something new together, they drop their titles at the door. The intern coaching the VP on grip technique does more for collaboration than any slide deck.\n\nNovel, low-stakes competition builds trust fast.",
        "Carousel: three short tips on what makes team activities stick, brand colors, simple icons.",
        &["#Leadership", "#TeamCulture", "#HRTips", "#WorkplaceWellness"],
        "Save this post for your next offsite planning session.",
    ),
    (
        3,
        "12:00 PM",
        "Feature Highlight - Axe Throwing",
        "First time throwing an axe? Perfect. Most of our corporate guests are.\n\nEvery session starts with a coach-led safety briefing, and within ten minutes your team is sticking throws and trading friendly trash talk.\n\nIt is focus, stress relief and celebration in one lane.",
        "Short slow-motion video of an axe rotating into the target, followed by a high five.",
        &["#AxeThrowing", "#TeamBuilding", "#StressRelief", "#CorporateFun"],
        "Book a lane for your department: link in the comments.",
    ),
    (
        4,
        "10:00 AM",
        "Testimonial",
        "\"Our sales team has done escape rooms, cooking classes and bowling. Axeclusive is the first event people asked to repeat.\" - Regional Sales Director\n\nWe love hearing this. The best team events are the ones people bring up for months afterwards.",
        "Quote card over a photo of the sales team posing with axes and paint-splattered coveralls.",
        &["#ClientLove", "#Testimonial", "#TeamBuilding", "#SalesTeam"],
        "Want the same reaction from your team? Send us a message.",
    ),
    (
        5,
        "11:00 AM",
        "Feature Highlight - Splatter Paint",
        "Some meetings end with action items. Ours end with paint on the ceiling.\n\nThe splatter paint room hands your team buckets, brushes and full permission to make a mess. It is loud, colorful and surprisingly great for creative thinking.\n\nCoveralls and goggles provided.",
        "Before-and-after photo of a white room transformed by a team's paint session.",
        &["#SplatterPaint", "#Creativity", "#TeamBuilding", "#OfficeCulture"],
        "Tag a coworker who needs to blow off some steam.",
    ),
    (
        6,
        "10:00 AM",
        "Behind the Scenes",
        "Before every corporate event, our coaches walk the space, sharpen every axe and prep the paint room so your group walks straight into the fun.\n\nA lot happens behind the scenes so your team never has to think about logistics.",
        "Behind-the-scenes photo series: sharpening station, lane setup, staff briefing.",
        &["#BehindTheScenes", "#EventPlanning", "#Axeclusive", "#SmallBusiness"],
        "Follow us for more behind-the-scenes moments.",
    ),
    (
        7,
        "6:00 PM",
        "Direct Invite",
        "HR managers and team leads: we are opening a limited number of weekday slots for corporate groups this month.\n\nPrivate lanes, a dedicated event host, and packages that combine axe throwing, splatter paint and VR.\n\nGroups of 10 to 100+ welcome.",
        "Clean graphic with the event package tiers and a calendar icon.",
        &["#CorporateEvents", "#HRManagers", "#TeamOuting", "#BookNow"],
        "Comment \"TEAM\" or send a DM to hold a date.",
    ),
    (
        8,
        "8:30 AM",
        "Educational - Team Building",
        "Remote and hybrid teams miss out on the small moments that build trust: hallway chats, shared lunches, inside jokes.\n\nOne in-person event a quarter gives those moments a place to happen.\n\nHere is how to make it count: pick an activity nobody is an expert in, keep groups mixed across departments, and leave time to hang out afterwards.",
        "Infographic: \"3 rules for hybrid team meetups\" with simple illustrations.",
        &["#HybridWork", "#RemoteTeams", "#TeamBuilding", "#Leadership"],
        "Share this with a manager planning a quarterly meetup.",
    ),
    (
        9,
        "12:00 PM",
        "Feature Highlight - VR Gaming",
        "Not every teammate wants to throw an axe, and that is fine.\n\nOur virtual reality arena lets teams solve puzzles, defend castles and race each other in fully immersive worlds.\n\nIt is a great fit for mixed-ability groups and anyone who loves a challenge.",
        "Video clip of two colleagues in VR headsets reacting while teammates watch the big screen.",
        &["#VirtualReality", "#VRGaming", "#TeamBuilding", "#Inclusive"],
        "Ask about combining VR with your axe throwing session.",
    ),
    (
        10,
        "9:00 AM",
        "Problem/Solution",
        "Problem: your team event budget got approved, but nobody wants another dinner at the same restaurant.\n\nSolution: a two-hour Axeclusive package with activities, snacks and a private space for speeches or awards.\n\nWe handle the setup so the organizer actually gets to enjoy the event.",
        "Split graphic: a bored dinner table on the left, a cheering lane on the right.",
        &["#EventPlanning", "#CorporateEvents", "#TeamBuilding", "#HR"],
        "Request a custom quote for your group size.",
    ),
    (
        11,
        "10:00 AM",
        "Testimonial",
        "\"We brought 60 people from three offices. Within an hour they were cheering for each other like one team.\" - Operations Manager\n\nLarge groups are our specialty. We rotate teams between stations so nobody waits around.",
        "Photo of a large group across multiple lanes, arms raised mid-cheer.",
        &["#ClientLove", "#LargeGroups", "#CorporateEvents", "#Teamwork"],
        "Planning for 50+? Let's talk about a full venue booking.",
    ),
    (
        12,
        "11:00 AM",
        "Feature Highlight - Axe Throwing",
        "Friendly competition, done right.\n\nOur coaches run bracket-style tournaments for corporate groups, complete with a scoreboard, playoffs and a championship throw.\n\nThe winner takes home bragging rights. Everyone else takes home a story.",
        "Tournament bracket graphic overlaid on a photo of the championship throw.",
        &["#AxeThrowing", "#FriendlyCompetition", "#TeamBuilding", "#OfficeFun"],
        "Challenge another department: book a tournament.",
    ),
    (
        13,
        "10:00 AM",
        "Behind the Scenes",
        "Meet the coaches who make every event run smoothly.\n\nEach one is trained in safety, group facilitation and, most importantly, getting the shyest person in the room to try one more throw.",
        "Portrait series of the coaching team with a one-line fun fact for each.",
        &["#MeetTheTeam", "#BehindTheScenes", "#Axeclusive", "#Hospitality"],
        "Say hi to the crew in the comments.",
    ),
    (
        14,
        "6:00 PM",
        "Seasonal/Timely",
        "Quarter-end is coming. Your team has been heads down for weeks.\n\nA celebration after a big push tells people their effort was seen. Make it something more memorable than pizza in the break room.",
        "Calendar graphic highlighting quarter-end with confetti and an axe icon.",
        &["#QuarterEnd", "#EmployeeAppreciation", "#TeamCelebration", "#CorporateEvents"],
        "Reserve your quarter-end celebration before dates fill up.",
    ),
    (
        15,
        "8:30 AM",
        "Educational - Team Building",
        "Engaged teams outperform disengaged ones, and engagement starts with connection.\n\nThree quick wins for team leads: celebrate small wins out loud, create shared experiences outside of work tasks, and let people see each other as more than their job title.",
        "Simple text-forward graphic with the three quick wins.",
        &["#EmployeeEngagement", "#Leadership", "#ManagementTips", "#TeamBuilding"],
        "Which of these does your team already do? Tell us below.",
    ),
    (
        16,
        "12:00 PM",
        "Feature Highlight - Splatter Paint",
        "Creative block? Throw some paint at it.\n\nDesign, marketing and product teams book the splatter paint room to reset and reconnect. Some even take their canvas back to hang in the office.",
        "Photo of a team holding their finished splatter canvas in front of the office logo.",
        &["#SplatterPaint", "#CreativeTeams", "#Innovation", "#TeamBuilding"],
        "Book a creative reset for your team.",
    ),
    (
        17,
        "10:00 AM",
        "Testimonial",
        "\"I was nervous about organizing an event for our whole department. The Axeclusive team handled everything and I got to actually join in.\" - HR Coordinator\n\nOrganizers deserve to have fun too.",
        "Photo of the event organizer mid-throw with the team cheering behind.",
        &["#ClientLove", "#HRLife", "#EventPlanning", "#Testimonial"],
        "Let us take event planning off your plate.",
    ),
    (
        18,
        "11:00 AM",
        "Feature Highlight - VR Gaming",
        "Cooperative VR missions reveal how your team really communicates.\n\nWho takes charge? Who spots the hidden clue? Who keeps everyone calm when the timer runs low?\n\nIt is a team-building workshop disguised as a game.",
        "Over-the-shoulder shot of the VR mission screen with team members pointing and shouting.",
        &["#VRGaming", "#Communication", "#Teamwork", "#Leadership"],
        "Add a cooperative VR mission to your next event.",
    ),
    (
        19,
        "9:00 AM",
        "Problem/Solution",
        "Problem: new hires have met their team on video calls but never in person.\n\nSolution: an onboarding cohort event. A couple of hours of shared challenges turns a list of names into a group that looks out for each other.",
        "Photo of a new-hire cohort posing with axes and name tags.",
        &["#Onboarding", "#NewHires", "#TeamBuilding", "#EmployeeExperience"],
        "Ask about our onboarding cohort packages.",
    ),
    (
        20,
        "10:00 AM",
        "Behind the Scenes",
        "What does a 100-person corporate event look like from our side?\n\nStation rotations planned to the minute, a host for every group, catering timed between rounds, and a wrap-up photo everyone actually wants to post.",
        "Timelapse of the venue filling up during a large corporate event.",
        &["#BehindTheScenes", "#EventOps", "#CorporateEvents", "#Axeclusive"],
        "Follow along for more event-day stories.",
    ),
    (
        21,
        "6:00 PM",
        "Direct Invite",
        "Team leads: what would it mean for your team to laugh together this month?\n\nWe have weekday afternoon slots open for groups of 10 to 40. Two hours, one price, zero planning stress.",
        "Bold graphic with \"Weekday Team Slots Open\" and a booking QR code.",
        &["#TeamOuting", "#BookNow", "#CorporateEvents", "#TeamBuilding"],
        "DM us \"SLOT\" to check availability.",
    ),
    (
        22,
        "8:30 AM",
        "Educational - Team Building",
        "How to measure whether a team event worked:\n\n1. Do people mention it afterwards?\n2. Do cross-team requests get answered faster?\n3. Do quieter members speak up more in meetings?\n\nConnection shows up in the work.",
        "Numbered list graphic with checkmarks and a subtle brand watermark.",
        &["#PeopleAnalytics", "#EmployeeEngagement", "#HR", "#TeamBuilding"],
        "Save this checklist for your next event debrief.",
    ),
    (
        23,
        "12:00 PM",
        "Feature Highlight - Axe Throwing",
        "Axe throwing is one of the few activities where focus beats strength.\n\nThat is why the quietest person on your team often ends up the champion. Watch the room shift when they land three bullseyes in a row.",
        "Close-up video of a perfect bullseye followed by the team erupting in applause.",
        &["#AxeThrowing", "#Focus", "#TeamBuilding", "#Underdog"],
        "Find your team's hidden champion: book a session.",
    ),
    (
        24,
        "10:00 AM",
        "Testimonial",
        "\"Our leadership offsite used to be all slides. This year we started with VR and axe throwing, and the strategy session afterwards was our best yet.\" - Chief People Officer\n\nPlay first, plan second.",
        "Photo of a leadership team in a meeting room with paint-splattered coveralls hung on chairs.",
        &["#LeadershipOffsite", "#ClientLove", "#Strategy", "#Testimonial"],
        "Ask about offsite packages with a private meeting room.",
    ),
    (
        25,
        "11:00 AM",
        "Seasonal/Timely",
        "Holiday party planning starts earlier than you think.\n\nPrime dates book out months in advance. Lock in a celebration that is more memorable than another banquet hall.",
        "Festive graphic with axes crossed over a wreath and a \"Book Early\" badge.",
        &["#HolidayParty", "#CorporateEvents", "#EventPlanning", "#BookEarly"],
        "Reserve your holiday date today.",
    ),
    (
        26,
        "10:00 AM",
        "Problem/Solution",
        "Problem: two teams just merged and everyone is still saying \"us\" and \"them\".\n\nSolution: mixed teams, shared challenges, and a tournament where the only rivalry is friendly.\n\nCulture integration starts with one good afternoon.",
        "Graphic of two colored groups blending into one across a lane divider.",
        &["#MergersAndAcquisitions", "#CultureIntegration", "#TeamBuilding", "#ChangeManagement"],
        "Talk to us about events for newly combined teams.",
    ),
    (
        27,
        "9:00 AM",
        "Feature Highlight - Splatter Paint",
        "Stress relief is not a perk. It is a performance strategy.\n\nTen minutes in the splatter paint room does more for a burnt-out team than another wellness webinar.",
        "Slow-motion clip of paint arcing across the room in bright colors.",
        &["#WorkplaceWellness", "#StressRelief", "#SplatterPaint", "#MentalHealth"],
        "Give your team a break they will remember.",
    ),
    (
        28,
        "6:00 PM",
        "Direct Invite",
        "Last call for this month's corporate slots.\n\nIf your team has been talking about doing something together, this is the sign. We will build a package around your group size, schedule and budget.",
        "Countdown-style graphic with remaining slot count.",
        &["#LastCall", "#CorporateEvents", "#TeamOuting", "#BookNow"],
        "Send us a message to claim one of the final dates.",
    ),
    (
        29,
        "10:00 AM",
        "Behind the Scenes",
        "Thirty days of stories, throws and paint splatters.\n\nThank you to every team that came through our doors this month. You remind us why we started Axeclusive: work is better when people actually know each other.",
        "Photo collage of the month's corporate groups.",
        &["#ThankYou", "#Community", "#Axeclusive", "#TeamBuilding"],
        "Tag your team if you were one of them.",
    ),
    (
        30,
        "9:00 AM",
        "Direct Invite",
        "Ready to give your team an experience they will talk about all year?\n\nAxe throwing, splatter paint, VR gaming and full event hosting for 10 to 100+ people.\n\nLet's plan something great together.",
        "Hero image of the venue at golden hour with the team lined up at the lanes.",
        &["#CorporateEvents", "#TeamBuilding", "#Axeclusive", "#LetsPlay"],
        "Book a discovery call and get your custom event plan.",
    ),
];

/// (week, focus, first day, last day)
const WEEKS: &[(u32, &str, u32, u32)] = &[
    (1, "Introduction & Brand Awareness", 1, 7),
    (2, "Educational Content & Value", 8, 14),
    (3, "Social Proof & Feature Highlights", 15, 21),
    (4, "Engagement & Conversion", 22, 28),
    (5, "Month Wrap-Up & Final Call", 29, 30),
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn posts() -> Vec<Post> {
    POSTS
        .iter()
        .map(|&(id, time, category, caption, image, hashtags, cta)| Post {
            id,
            day: id,
            weekday: weekday_for(id).to_string(),
            post_time: time.to_string(),
            category: category.to_string(),
            caption: caption.to_string(),
            image_idea: image.to_string(),
            hashtags: strings(hashtags),
            cta: cta.to_string(),
        })
        .collect()
}

fn weeks() -> Vec<CalendarWeek> {
    WEEKS
        .iter()
        .map(|&(week, focus, first, last)| CalendarWeek {
            week,
            focus: focus.to_string(),
            posts: (first..=last).collect(),
        })
        .collect()
}

fn guidelines() -> PostingGuidelines {
    PostingGuidelines {
        best_days: strings(&["Tuesday", "Wednesday", "Thursday"]),
        best_times: strings(&[
            "7:30 - 8:30 AM (before work)",
            "12:00 - 1:00 PM (lunch break)",
            "5:00 - 6:00 PM (end of workday)",
        ]),
        avoid_days: strings(&[
            "Late Friday afternoons",
            "Weekends for B2B announcements",
            "Major holidays",
        ]),
        frequency: "One post per day for 30 days, then 3-5 posts per week".to_string(),
        engagement: "Reply to every comment within the first hour and engage with 5-10 posts from HR and event-planning professionals daily".to_string(),
    }
}

fn strategies() -> Vec<String> {
    strings(&[
        "Connect with HR managers, office managers and team leads at local companies every week",
        "Share client event photos (with permission) and tag the participating companies",
        "Publish a monthly LinkedIn article on team building trends and employee engagement",
        "Join and contribute to local business and HR professional groups",
        "Offer a first-time corporate booking discount promoted through LinkedIn messages",
        "Encourage employees and coaches to reshare company posts from their own profiles",
        "Run a short poll each month about team event preferences to drive engagement",
        "Collect video testimonials at the end of corporate events",
    ])
}

fn audience() -> TargetAudience {
    TargetAudience {
        primary: strings(&[
            "Corporate offices",
            "HR managers",
            "Team leaders",
            "Event planners",
        ]),
        key_services: strings(&[
            "Axe throwing",
            "Splatter paint room",
            "Virtual reality gaming",
            "Corporate events (10-100+ people)",
        ]),
    }
}

fn metadata() -> PageMetadata {
    PageMetadata {
        title: "Axeclusive LinkedIn Content Manager".to_string(),
        description: "30-day LinkedIn content calendar for Axeclusive corporate events".to_string(),
        heading: "Axeclusive LinkedIn Content Hub".to_string(),
        tagline: "30-Day Corporate Marketing Strategy for Team Building Excellence".to_string(),
        footer: "Axeclusive LinkedIn Content Manager • 30-Day Corporate Marketing Strategy"
            .to_string(),
    }
}

/// Build and validate the built-in store.
pub(super) fn build() -> Result<ContentStore, ContentError> {
    ContentStore::new(
        posts(),
        weeks(),
        guidelines(),
        strategies(),
        audience(),
        metadata(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let store = build().unwrap();
        assert_eq!(store.post_count(), 30);
        assert_eq!(store.weeks().len(), 5);
    }

    #[test]
    fn test_every_post_is_scheduled_once() {
        let store = build().unwrap();
        let scheduled: usize = store.weeks().iter().map(|w| w.posts.len()).sum();
        assert_eq!(scheduled, store.post_count());
    }

    #[test]
    fn test_weekday_cycle() {
        assert_eq!(weekday_for(1), "Monday");
        assert_eq!(weekday_for(7), "Sunday");
        assert_eq!(weekday_for(8), "Monday");
        assert_eq!(weekday_for(30), "Tuesday");
    }

    #[test]
    fn test_days_are_monotonic() {
        let store = build().unwrap();
        let days: Vec<u32> = store.posts().iter().map(|p| p.day).collect();
        assert!(days.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_hashtags_carry_prefix() {
        let store = build().unwrap();
        assert!(store
            .posts()
            .iter()
            .flat_map(|p| p.hashtags.iter())
            .all(|tag| tag.starts_with('#')));
    }
}
