//! Web search capability used by the recommendation loop.
//!
//! `StubWebSearch` answers from three canned result blocks chosen by
//! substring match on the query. A real provider only has to implement
//! [`Search`] to replace it.

use log::info;

/// Text in, text out. Implementations must not fail; degrade to a
/// "no results" style text instead.
pub trait Search {
    async fn search(&self, query: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StubWebSearch;

impl Search for StubWebSearch {
    async fn search(&self, query: &str) -> String {
        info!("Performing web search for: {}", query);
        canned_results(query)
    }
}

pub fn canned_results(query: &str) -> String {
    let body = if query.contains("San Francisco") && query.contains("museum") {
        MUSEUM_RESULTS
    } else if query.contains("Golden Gate Park") || query.contains("outdoor") {
        OUTDOOR_RESULTS
    } else {
        GENERAL_RESULTS
    };

    format!("Search results for \"{}\":\n\n{}", query, body)
}

const MUSEUM_RESULTS: &str = "**Exploratorium - San Francisco**
- Address: Pier 15, San Francisco, CA 94111
- Hours: Saturday 10am-5pm
- Family-friendly interactive science museum
- Perfect for ages 8-12 with hands-on exhibits
- Distance: 2.5 miles from downtown SF
- Admission: Adults $29, Youth (13-17) $24, Children (4-12) $19

**California Academy of Sciences**
- Address: 55 Music Concourse Dr, Golden Gate Park
- Hours: Saturday 9:30am-5pm
- Features planetarium, aquarium, rainforest dome, natural history museum
- Great for educational experiences and all ages
- Distance: 3.2 miles from downtown SF
- Admission: Adults $39.95, Youth (12-17) $34.95, Children (4-11) $29.95

**Children's Creativity Museum**
- Address: 221 4th St, Yerba Buena Gardens
- Hours: Saturday 10am-4pm
- Hands-on multimedia arts and technology activities
- Perfect for kids 2-12 years old
- Distance: 1.8 miles from downtown SF
- Admission: $12 per person

**SFMOMA (San Francisco Museum of Modern Art)**
- Address: 151 3rd St, San Francisco
- Hours: Saturday 10am-5pm
- Modern and contemporary art collections
- Family programs and art-making activities
- Distance: 1.5 miles from downtown SF
- Admission: Adults $25, Seniors/Students $22, Ages 18 & under FREE";

const OUTDOOR_RESULTS: &str = "**Golden Gate Park - Multiple Attractions**
- Japanese Tea Garden: Traditional garden with pagodas and tea house
- Saturday hours: 9am-6pm, $10 adults, $7 youth/seniors, children 4 & under free
- Distance: 3.5 miles from downtown

**Crissy Field**
- Large open space with Golden Gate Bridge views
- Free outdoor recreation area
- Perfect for picnics and outdoor activities
- Distance: 2.8 miles from downtown

**Aquatic Cove and Maritime Museum**
- Historic ships and maritime exhibits
- Saturday hours: 9:30am-5pm
- Free admission to some areas
- Distance: 2.2 miles from downtown";

const GENERAL_RESULTS: &str = "**General San Francisco Family Activities**
- Alcatraz Island Tours: Historic prison tours, advance booking required
- Lombard Street: Famous \"crookedest street\" for sightseeing
- Fisherman's Wharf: Entertainment, street performers, sea lions
- Union Square: Shopping and entertainment district
- Chinatown: Cultural exploration and dim sum restaurants
- Cable Car Rides: Historic transportation and city tours

**Weekend Events (Saturday afternoons)**
- Farmers markets in various neighborhoods
- Street festivals and outdoor concerts (seasonal)
- Family-friendly walking tours
- Outdoor movie screenings (weather permitting)";
