/// Render the instruction prompt for one search.
///
/// The "Output Format" section is the contract `activity_parser` reads back:
/// a glyph and `**bold title**` line, description lines, then a `📍 venue • distance` line.
/// Change both together.
pub fn build_prompt(
    city: &str,
    ages: &str,
    availability: &str,
    distance: &str,
    preferences: &str,
) -> String {
    format!(
        "You are a family activity finder assistant. Help parents discover perfect activities for their families based on their specific criteria.

**Family Details:**
- Location: {city}
- Kids Ages: {ages}
- Availability: {availability}
- Maximum Distance: {distance}
- Additional Preferences: {preferences}

Please use the web search tool to find current, real activities and events that match these criteria. Then provide exactly 5 activity recommendations.

**Search Strategy:**
1. Search for family activities, events, and attractions in {city}
2. Look for activities appropriate for ages {ages}
3. Focus on activities available during {availability}
4. Consider the {distance} travel limitation
5. Include {preferences} in your search criteria

**Output Format:**
For each recommendation, provide exactly this format:

🎨 **Activity Name - Typical Hours**
Description of the activity in 2-4 sentences explaining what families can do there and why it's great for kids these ages.
📍 Venue Name • Estimated distance

**Requirements:**
- All 5 recommendations must be real, current activities found through web search
- Include a mix of activity types (educational, entertainment, outdoor, cultural, etc.)
- Ensure activities are age-appropriate for the specified children
- Verify activities are available during the requested time period
- Stay within the specified distance range
- Consider the additional preferences provided

Please search for activities now and provide your 5 recommendations. After gathering sufficient information from 1-3 searches, please provide your final recommendations in the specified format."
    )
}
