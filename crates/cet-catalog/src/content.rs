//! Built-in site content.

use crate::model::{
    CompanyProfile, FaqEntry, NavLink, NavSection, NavigationTree, Testimonial, ThemeList,
};

pub(crate) static COMPANY: CompanyProfile = CompanyProfile {
    name: "Cuba Educational Travel",
    abbreviation: "CET",
    tagline: "With decades of experience and a dynamic team on the ground, CET produces \
              unforgettable programs, from family trips to academic travel to corporate retreats.",
    mission: "Cuba Educational Travel is a team of young Cubans and Americans working together to \
              help better the relationship between our two countries through legal travel, \
              exchanges, and unforgettable experiences.",
    founder: "Collin Laverty, a leading expert on U.S.-Cuba relations",
    legal_status: "CET is legal and licensed by the Cuban and US governments",
    email: "info@cubaeducationaltravel.com",
    phone: "+1 (202) 450-3321",
    address: "1627 K Street NW, Suite 300, Washington, DC 20006",
    founded: "2009",
};

const CUBA_TRAVEL: &[NavLink] = &[
    NavLink {
        name: "People to People",
        endpoint: "travel_people_to_people",
    },
    NavLink {
        name: "Private Trips",
        endpoint: "travel_private",
    },
    NavLink {
        name: "Academic Programs",
        endpoint: "travel_academic",
    },
    NavLink {
        name: "CET Luxury",
        endpoint: "travel_luxury",
    },
    NavLink {
        name: "Corporate Travel",
        endpoint: "travel_corporate",
    },
    NavLink {
        name: "Events in Cuba",
        endpoint: "travel_events",
    },
];

const ABOUT_CET: &[NavLink] = &[
    NavLink {
        name: "The CET Story",
        endpoint: "about_story",
    },
    NavLink {
        name: "Impact",
        endpoint: "about_impact",
    },
    NavLink {
        name: "In the News",
        endpoint: "about_news",
    },
    NavLink {
        name: "Testimonials",
        endpoint: "about_testimonials",
    },
];

const RESOURCES: &[NavLink] = &[
    NavLink {
        name: "Business in Cuba",
        endpoint: "resources_business",
    },
    NavLink {
        name: "FAQs",
        endpoint: "resources_faqs",
    },
    NavLink {
        name: "Contact Us",
        endpoint: "contact",
    },
    NavLink {
        name: "The Newsletter",
        endpoint: "newsletter",
    },
];

const SECTIONS: &[NavSection] = &[
    NavSection {
        key: "cuba_travel",
        title: "Cuba Travel",
        links: CUBA_TRAVEL,
    },
    NavSection {
        key: "about_cet",
        title: "About CET",
        links: ABOUT_CET,
    },
    NavSection {
        key: "resources",
        title: "Resources",
        links: RESOURCES,
    },
];

pub(crate) const NAVIGATION: NavigationTree = NavigationTree::new(SECTIONS);

pub(crate) const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Richard Feinberg",
        title: "Professor, UCSB, and author of Cuba: Open for Business",
        quote: "If you want to get to know Cuba from the inside out\u{2026}if you want to \
                experience the authentic, down-to-earth Cuba\u{2026}if you want to create \
                beautiful memories for a lifetime, here's your solution: visit Cuba with CET! For \
                the first-class professionals at Cuba Educational Travel, tourism is so much more \
                than a job, it's a moral commitment to building lasting bonds between \
                international visitors and their many wonderful friends and colleagues in their \
                beloved Cuba.",
    },
    Testimonial {
        name: "James Williams",
        title: "President, Engage Cuba",
        quote: "CET's incredible team and on-the-ground knowledge is critically important to \
                Engage Cuba and everyone who cares about U.S.-Cuba relations. Their real-time \
                insights are essential to the policy discussions in D.C. and Havana.",
    },
    Testimonial {
        name: "Sara Egozi",
        title: "MBA/MPA Candidate at Stanford GSB and Harvard Kennedy School",
        quote: "We partnered with CET to plan an educational trek for Harvard Kennedy School \
                students and several cultural trips for Stanford Business School students. They \
                offer the highest quality network across political and business communities in \
                Cuba. As a Cuban American, I wanted a rich, diverse experience -- and CET \
                delivered.",
    },
    Testimonial {
        name: "Meg Crahan",
        title: "Senior Research Scholar and Director of the Cuba Program at Columbia University",
        quote: "Having travelled to Cuba dozens of times since 1973 for academic research, I was \
                very familiar with the challenges involved. Cuba Educational Travel eliminates \
                most of the hurdles for academic, cultural and scientific exchanges and is \
                particularly astute in designing tailor-made programs to accommodate a wide \
                variety of interests. CET combines professionalism with know-how.",
    },
    Testimonial {
        name: "Mitchell C. Benson, M.D.",
        title: "President, NY Section AUA",
        quote: "The New York Section of the American Urological Association has an annual meeting \
                every year. This year, we chose to have our meeting in Havana Cuba, jointly with \
                the Cuban Urologic Association. This year's meeting in Cuba was an unforgettable \
                experience and could not have been successful without the onsite assistance of \
                CET.",
    },
    Testimonial {
        name: "Mike Evans",
        title: "Founder of Full Court Peace, over 30 trips to Cuba",
        quote: "Cuba Educational Travel provides me with reliable counsel, proven advice and \
                amazing general support. They know Cuba in and out, from safety to genuine \
                grassroots experiences. I trust their guidance and expertise more than any other \
                group involved in Cuba travel.",
    },
    Testimonial {
        name: "Mario Recchia",
        title: "WorldPac Senior VP",
        quote: "I want to thank the CET team for making this a very memorable event for all our \
                guests. The personal attention from arrival, all the activities, meals, \
                discussions and the ultimate departure was flawlessly executed and greatly \
                appreciated by all.",
    },
];

pub(crate) const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Is travel to Cuba legal for US citizens?",
        answer: "Yes, Cuba Educational Travel is fully licensed by both Cuban and US governments \
                 to facilitate legal travel to Cuba under various categories including Support for \
                 the Cuban People and Educational Activities.",
    },
    FaqEntry {
        question: "What is included in CET programs?",
        answer: "Our programs include accommodation, meals, ground transportation, licensed guide \
                 services, entrance fees to sites, and all activities specified in the itinerary. \
                 International airfare is typically not included unless specified.",
    },
    FaqEntry {
        question: "What is the minimum group size?",
        answer: "There is no minimum number of participants for our private trips. Our groups \
                 range from two to two hundred participants.",
    },
    FaqEntry {
        question: "Can you customize trips?",
        answer: "Absolutely! We specialize in creating tailor-made programs focusing on different \
                 aspects of Cuban society including agriculture, arts and music, cuisine, \
                 education, environment, health care, fashion, science and sports.",
    },
    FaqEntry {
        question: "How far in advance should we book?",
        answer: "We recommend booking at least 60-90 days in advance to ensure availability and \
                 proper planning. However, we can sometimes accommodate shorter notice requests \
                 depending on group size and travel dates.",
    },
    FaqEntry {
        question: "What documents do I need to travel to Cuba?",
        answer: "U.S. citizens need a valid passport and a Cuban tourist visa (available through \
                 our office). We handle all the paperwork and ensure compliance with current U.S. \
                 regulations.",
    },
    FaqEntry {
        question: "What should I expect from the weather in Cuba?",
        answer: "Cuba has a tropical climate with warm temperatures year-round. The dry season \
                 (November-April) offers the most comfortable weather, while the wet season \
                 (May-October) can be humid with occasional afternoon showers.",
    },
    FaqEntry {
        question: "Is Cuba safe for American travelers?",
        answer: "Cuba is generally very safe for tourists. The country has low crime rates, and \
                 our local team provides 24/7 support throughout your trip to ensure your safety \
                 and comfort.",
    },
];

pub(crate) const THEMES: ThemeList = &[
    "agriculture",
    "arts and music",
    "cuisine",
    "education",
    "environment",
    "health care",
    "fashion",
    "science",
    "sports",
];
